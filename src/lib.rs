//! 비행 조건 입력을 외부 공력 계산기 질의로 변환하고, 결과를 단위계에 맞춰 표시 문자열로 투영한다.
//!
//! 물리 모델(대기, 압축성 유동)은 [`evaluator::ConditionEvaluator`] 뒤의 외부 라이브러리가 담당하며,
//! 이 크레이트는 입력 해석, 단위 변환, 출력 투영만 다룬다.

pub mod config;
pub mod conversion;
pub mod evaluator;
pub mod fields;
pub mod format;
pub mod i18n;
pub mod mode;
pub mod projector;
pub mod quantity;
pub mod query;
pub mod render;
pub mod session;
pub mod units;
