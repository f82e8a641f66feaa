//! 계산 결과를 항목별 표시 문자열로 투영한다.
use crate::config::UnitSystem;
use crate::conversion::ConversionError;
use crate::evaluator::{FlightResult, ResultValue};
use crate::fields::{FieldSpec, UnitChoices, LAYER_NAME};
use crate::format::format_display;
use crate::session::DisplayUnitSelection;

/// 출력 투영 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectError {
    /// 결과에 없는 항목. 부가 출력 게이트를 거치지 않은 호출에서 생긴다.
    MissingField(String),
    /// 단위 후보 범위를 벗어난 기본 인덱스
    UnitIndexOutOfRange { key: String, index: usize, len: usize },
    /// 수치가 필요한 자리에 문자열 라벨이 옴
    NotNumeric(String),
    /// 라벨 항목인데 문자열이 아님
    NotLabel(String),
    /// 단위 변환이 필요한데 결과 값에 단위가 없음
    NotDimensional(String),
    /// 단위 변환 실패
    Conversion(ConversionError),
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::MissingField(key) => write!(f, "결과에 없는 항목: {key}"),
            ProjectError::UnitIndexOutOfRange { key, index, len } => {
                write!(f, "{key} 단위 인덱스 {index}가 후보 개수 {len}를 벗어남")
            }
            ProjectError::NotNumeric(key) => write!(f, "{key} 항목이 수치가 아님"),
            ProjectError::NotLabel(key) => write!(f, "{key} 항목이 문자열이 아님"),
            ProjectError::NotDimensional(key) => write!(f, "{key} 항목에 단위가 없음"),
            ProjectError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for ProjectError {}

impl From<ConversionError> for ProjectError {
    fn from(value: ConversionError) -> Self {
        ProjectError::Conversion(value)
    }
}

/// 투영된 출력 항목.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    pub key: &'static str,
    pub text: String,
    /// 표시에 쓴 단위. 무차원/라벨 항목은 `None`.
    pub unit: Option<&'static str>,
    /// UI가 제공할 단위 선택지. `None`이면 선택지를 만들지 않는다.
    pub choices: Option<&'static [&'static str]>,
}

fn lookup<'a>(result: &'a FlightResult, key: &str) -> Result<&'a ResultValue, ProjectError> {
    result
        .get(key)
        .ok_or_else(|| ProjectError::MissingField(key.to_string()))
}

/// 결과 항목 하나를 단위계 기본 단위로 환산해 `%8.5g` 문자열로 만든다.
///
/// - `Dimensionless`이면 단위 변환 없이 원래 크기를 서식화한다.
/// - `layer_name`(또는 `Label`)은 계산기가 준 문자열을 그대로 돌려준다.
pub fn project(
    result: &FlightResult,
    key: &str,
    candidates: UnitChoices,
    unit_system: UnitSystem,
    us_index: usize,
    si_index: usize,
) -> Result<String, ProjectError> {
    let value = lookup(result, key)?;
    if key == LAYER_NAME || candidates == UnitChoices::Label {
        return match value {
            ResultValue::Label(name) => Ok(name.clone()),
            _ => Err(ProjectError::NotLabel(key.to_string())),
        };
    }
    match candidates {
        UnitChoices::Units { units, .. } => {
            let index = match unit_system {
                UnitSystem::US => us_index,
                UnitSystem::SI => si_index,
            };
            let unit = units
                .get(index)
                .ok_or_else(|| ProjectError::UnitIndexOutOfRange {
                    key: key.to_string(),
                    index,
                    len: units.len(),
                })?;
            project_in_unit(key, value, unit)
        }
        UnitChoices::Dimensionless => match value {
            ResultValue::Scalar(x) => Ok(format_display(*x)),
            ResultValue::Quantity(v) => Ok(format_display(v.magnitude)),
            ResultValue::Label(_) => Err(ProjectError::NotNumeric(key.to_string())),
        },
        UnitChoices::Label => Err(ProjectError::NotLabel(key.to_string())),
    }
}

fn project_in_unit(key: &str, value: &ResultValue, unit: &str) -> Result<String, ProjectError> {
    match value {
        ResultValue::Quantity(v) => Ok(format_display(v.to(unit)?)),
        ResultValue::Scalar(_) => Err(ProjectError::NotDimensional(key.to_string())),
        ResultValue::Label(_) => Err(ProjectError::NotNumeric(key.to_string())),
    }
}

/// 항목 정의와 사용자 단위 선택을 반영해 투영한다.
///
/// 사용자가 고른 단위가 있으면 그 단위를, 없으면 표의 US/SI 기본 인덱스를 쓴다.
pub fn project_field(
    result: &FlightResult,
    spec: &FieldSpec,
    unit_system: UnitSystem,
    display: &DisplayUnitSelection,
) -> Result<ProjectedField, ProjectError> {
    let choices = spec.choices.units();
    let chosen = display.get(spec.key).filter(|unit| spec.offers(unit));
    let (text, unit) = match chosen {
        Some(unit) => {
            let value = lookup(result, spec.key)?;
            (project_in_unit(spec.key, value, unit)?, Some(unit))
        }
        None => (
            project(
                result,
                spec.key,
                spec.choices,
                unit_system,
                spec.us_index,
                spec.si_index,
            )?,
            spec.default_unit(unit_system),
        ),
    };
    log::trace!("{} = {} {}", spec.key, text.trim(), unit.unwrap_or(""));
    Ok(ProjectedField {
        key: spec.key,
        text,
        unit,
        choices,
    })
}
