//! 외부 비행 조건 계산기(대기 모델, 압축성 유동 관계식)와의 경계.
use std::collections::BTreeMap;

use crate::config::UnitSystem;
use crate::query::Query;
use crate::quantity::UnitTaggedValue;

/// 계산기 호출 옵션.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalOptions {
    /// 부가 출력 항목까지 계산할지 여부
    pub full_output: bool,
    /// 결과 기본 단위의 기준 단위계
    pub unit_system: UnitSystem,
}

/// 결과 항목 하나의 값.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Quantity(UnitTaggedValue),
    /// 마하수, 레이놀즈 수, 마찰계수 같은 무차원 값
    Scalar(f64),
    /// 대기층 이름 같은 문자열
    Label(String),
}

/// 계산기가 돌려준 결과. 물리량 이름 → 값.
///
/// 내부 구조는 계산기 쪽 소관이며 여기서는 이름으로 조회만 한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightResult {
    values: BTreeMap<String, ResultValue>,
}

impl FlightResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ResultValue) {
        self.values.insert(name.into(), value);
    }

    /// 체이닝용 삽입.
    pub fn with(mut self, name: impl Into<String>, value: ResultValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ResultValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 외부 계산기가 보고한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorError {
    pub message: String,
}

impl EvaluatorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "비행 조건 계산 오류: {}", self.message)
    }
}

impl std::error::Error for EvaluatorError {}

/// 질의를 받아 비행 조건을 계산하는 외부 라이브러리.
pub trait ConditionEvaluator {
    /// 질의 키(h/H/p, M/TAS/CAS/EAS, L/Re)를 인자로 넘겨 결과를 계산한다.
    fn evaluate(&self, query: &Query, options: EvalOptions) -> Result<FlightResult, EvaluatorError>;

    /// 계산기 자체의 텍스트 출력. 텍스트 모드에서 투영 대신 쓰인다.
    fn to_text(&self, query: &Query, options: EvalOptions) -> Result<String, EvaluatorError>;
}

impl<E: ConditionEvaluator + ?Sized> ConditionEvaluator for &E {
    fn evaluate(&self, query: &Query, options: EvalOptions) -> Result<FlightResult, EvaluatorError> {
        (**self).evaluate(query, options)
    }

    fn to_text(&self, query: &Query, options: EvalOptions) -> Result<String, EvaluatorError> {
        (**self).to_text(query, options)
    }
}
