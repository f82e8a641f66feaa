//! 입력 해석 → 외부 계산 → 부가 출력 게이트 → 투영으로 이어지는 한 번의 렌더 패스.
use crate::evaluator::{ConditionEvaluator, EvaluatorError};
use crate::fields::visible_fields;
use crate::i18n::Translator;
use crate::projector::{self, ProjectError};
use crate::query::ResolveError;
use crate::session::{DisplayUnitSelection, Selection};

/// 렌더 패스 중 발생 가능한 오류를 표현한다. 어느 단계든 실패하면 그 패스는 중단된다.
#[derive(Debug)]
pub enum RenderError {
    /// 입력 해석 오류
    Resolve(ResolveError),
    /// 외부 계산기 오류
    Evaluator(EvaluatorError),
    /// 출력 투영 오류
    Project(ProjectError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Resolve(e) => write!(f, "입력 해석 오류: {e}"),
            RenderError::Evaluator(e) => write!(f, "{e}"),
            RenderError::Project(e) => write!(f, "출력 투영 오류: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Resolve(e) => Some(e),
            RenderError::Evaluator(e) => Some(e),
            RenderError::Project(e) => Some(e),
        }
    }
}

impl From<ResolveError> for RenderError {
    fn from(value: ResolveError) -> Self {
        RenderError::Resolve(value)
    }
}

impl From<EvaluatorError> for RenderError {
    fn from(value: EvaluatorError) -> Self {
        RenderError::Evaluator(value)
    }
}

impl From<ProjectError> for RenderError {
    fn from(value: ProjectError) -> Self {
        RenderError::Project(value)
    }
}

/// UI 호스트에 넘길 출력 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField {
    pub key: &'static str,
    pub label: String,
    /// `%8.5g` 서식 문자열 또는 대기층 이름
    pub text: String,
    pub unit: Option<&'static str>,
    /// 단위 선택지. 무차원/라벨 항목은 `None`.
    pub choices: Option<&'static [&'static str]>,
}

/// 렌더 패스 결과.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedOutput {
    /// 항목별 투영
    Fields(Vec<RenderedField>),
    /// 계산기 텍스트 출력을 그대로 표시
    Text(String),
}

impl RenderedOutput {
    pub fn fields(&self) -> &[RenderedField] {
        match self {
            RenderedOutput::Fields(fields) => fields,
            RenderedOutput::Text(_) => &[],
        }
    }

    pub fn field(&self, key: &str) -> Option<&RenderedField> {
        self.fields().iter().find(|f| f.key == key)
    }
}

/// 한 번의 렌더 패스를 실행한다.
///
/// 매번 선택값에서 새 질의를 만들어 계산기에 넘기며, 투영은 그 패스의 결과에만 적용한다.
pub fn render<E: ConditionEvaluator>(
    selection: &Selection,
    evaluator: &E,
    display: &DisplayUnitSelection,
    tr: &Translator,
) -> Result<RenderedOutput, RenderError> {
    let query = selection.resolve()?;
    log::debug!("질의: {query}");
    let options = selection.eval_options();

    if selection.text_output {
        let text = evaluator.to_text(&query, options)?;
        return Ok(RenderedOutput::Text(text));
    }

    let result = evaluator.evaluate(&query, options)?;
    log::debug!("결과 항목 {}개 (full_output={})", result.len(), options.full_output);

    let mut fields = Vec::new();
    for spec in visible_fields(options.full_output) {
        let projected = projector::project_field(&result, spec, options.unit_system, display)?;
        fields.push(RenderedField {
            key: projected.key,
            label: tr.field_label(spec).to_string(),
            text: projected.text,
            unit: projected.unit,
            choices: projected.choices,
        });
    }
    Ok(RenderedOutput::Fields(fields))
}
