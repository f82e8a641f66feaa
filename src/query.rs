//! 입력 모드 선택을 외부 계산기로 넘길 질의(`Query`)로 해석한다.
use serde::Serialize;

use crate::conversion::ConversionError;
use crate::mode::{AirspeedMode, AltitudeMode, InvalidMode, LengthMode};
use crate::quantity::{QuantityKind, UnitTaggedValue};

/// 질의에 쓰이는 고정 키 집합 {h, H, p, M, TAS, CAS, EAS, L, Re}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QueryKey {
    GeometricAltitude,
    GeopotentialAltitude,
    Pressure,
    Mach,
    TrueAirspeed,
    CalibratedAirspeed,
    EquivalentAirspeed,
    Length,
    Reynolds,
}

impl QueryKey {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKey::GeometricAltitude => "h",
            QueryKey::GeopotentialAltitude => "H",
            QueryKey::Pressure => "p",
            QueryKey::Mach => "M",
            QueryKey::TrueAirspeed => "TAS",
            QueryKey::CalibratedAirspeed => "CAS",
            QueryKey::EquivalentAirspeed => "EAS",
            QueryKey::Length => "L",
            QueryKey::Reynolds => "Re",
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 질의 값. 단위가 붙은 값이거나 무차원 수.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryValue {
    Dimensional(UnitTaggedValue),
    Dimensionless(f64),
}

impl QueryValue {
    pub fn magnitude(&self) -> f64 {
        match self {
            QueryValue::Dimensional(v) => v.magnitude,
            QueryValue::Dimensionless(v) => *v,
        }
    }

    pub fn unit(&self) -> Option<&'static str> {
        match self {
            QueryValue::Dimensional(v) => Some(v.unit),
            QueryValue::Dimensionless(_) => None,
        }
    }
}

/// 고도 그룹 항목. 정확히 하나만 존재한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AltitudeInput {
    Geometric(UnitTaggedValue),
    Geopotential(UnitTaggedValue),
    Pressure(UnitTaggedValue),
}

/// 대기속도 그룹 항목.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AirspeedInput {
    Mach(f64),
    True(UnitTaggedValue),
    Calibrated(UnitTaggedValue),
    Equivalent(UnitTaggedValue),
}

/// 길이 그룹 항목.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LengthInput {
    Length(UnitTaggedValue),
    Reynolds(f64),
}

/// 외부 계산기에 전달하는 질의. 그룹마다 하나씩, 항상 3개의 키를 가진다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub altitude: AltitudeInput,
    pub airspeed: AirspeedInput,
    pub length: LengthInput,
}

impl Query {
    /// (키, 값) 쌍을 고도, 대기속도, 길이 순으로 반환한다.
    pub fn entries(&self) -> [(QueryKey, QueryValue); 3] {
        let altitude = match &self.altitude {
            AltitudeInput::Geometric(v) => (QueryKey::GeometricAltitude, dim(v)),
            AltitudeInput::Geopotential(v) => (QueryKey::GeopotentialAltitude, dim(v)),
            AltitudeInput::Pressure(v) => (QueryKey::Pressure, dim(v)),
        };
        let airspeed = match &self.airspeed {
            AirspeedInput::Mach(m) => (QueryKey::Mach, QueryValue::Dimensionless(*m)),
            AirspeedInput::True(v) => (QueryKey::TrueAirspeed, dim(v)),
            AirspeedInput::Calibrated(v) => (QueryKey::CalibratedAirspeed, dim(v)),
            AirspeedInput::Equivalent(v) => (QueryKey::EquivalentAirspeed, dim(v)),
        };
        let length = match &self.length {
            LengthInput::Length(v) => (QueryKey::Length, dim(v)),
            LengthInput::Reynolds(re) => (QueryKey::Reynolds, QueryValue::Dimensionless(*re)),
        };
        [altitude, airspeed, length]
    }

    /// 키로 값을 찾는다. 질의에 없는 키면 `None`.
    pub fn get(&self, key: QueryKey) -> Option<QueryValue> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries()
            .iter()
            .map(|(k, v)| match v {
                QueryValue::Dimensional(u) => format!("{k}={u}"),
                QueryValue::Dimensionless(x) => format!("{k}={x}"),
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

fn dim(v: &UnitTaggedValue) -> QueryValue {
    QueryValue::Dimensional(v.clone())
}

/// 질의 해석 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// 모드 선택값이 인식 범위 밖
    InvalidMode(InvalidMode),
    /// 모드가 허용하지 않는 단위
    UnitNotAllowed { key: QueryKey, unit: String },
    /// 음수 또는 유한하지 않은 입력값
    NegativeValue { key: QueryKey, value: f64 },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::InvalidMode(e) => write!(f, "{e}"),
            ResolveError::UnitNotAllowed { key, unit } => {
                write!(f, "{key} 입력에 허용되지 않는 단위: {unit}")
            }
            ResolveError::NegativeValue { key, value } => {
                write!(f, "{key} 입력은 0 이상의 유한한 값이어야 합니다: {value}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<InvalidMode> for ResolveError {
    fn from(value: InvalidMode) -> Self {
        ResolveError::InvalidMode(value)
    }
}

fn check_magnitude(key: QueryKey, value: f64) -> Result<f64, ResolveError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ResolveError::NegativeValue { key, value })
    }
}

/// 단위를 정규화한 뒤 모드의 허용 단위 목록에 있는지 확인한다.
fn tagged(
    key: QueryKey,
    kind: QuantityKind,
    allowed: &[&str],
    value: f64,
    unit: &str,
) -> Result<UnitTaggedValue, ResolveError> {
    let not_allowed = || ResolveError::UnitNotAllowed {
        key,
        unit: unit.to_string(),
    };
    let v = UnitTaggedValue::new(kind, check_magnitude(key, value)?, unit)
        .map_err(|_: ConversionError| not_allowed())?;
    if allowed.contains(&v.unit) {
        Ok(v)
    } else {
        Err(not_allowed())
    }
}

/// 모드 선택과 원시 입력값으로 질의를 만든다.
///
/// 마하수와 레이놀즈 수 모드에서는 단위 인자를 무시한다.
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    altitude_mode: AltitudeMode,
    altitude_value: f64,
    altitude_unit: &str,
    airspeed_mode: AirspeedMode,
    airspeed_value: f64,
    airspeed_unit: &str,
    length_mode: LengthMode,
    length_value: f64,
    length_unit: &str,
) -> Result<Query, ResolveError> {
    let alt = |mode: AltitudeMode| {
        tagged(mode.key(), mode.kind(), mode.units(), altitude_value, altitude_unit)
    };
    let altitude = match altitude_mode {
        AltitudeMode::GeometricAltitude => AltitudeInput::Geometric(alt(altitude_mode)?),
        AltitudeMode::GeopotentialAltitude => AltitudeInput::Geopotential(alt(altitude_mode)?),
        AltitudeMode::PressureAltitude => AltitudeInput::Pressure(alt(altitude_mode)?),
    };

    let speed = |mode: AirspeedMode| {
        tagged(mode.key(), QuantityKind::Velocity, mode.units(), airspeed_value, airspeed_unit)
    };
    let airspeed = match airspeed_mode {
        AirspeedMode::MachNumber => {
            AirspeedInput::Mach(check_magnitude(airspeed_mode.key(), airspeed_value)?)
        }
        AirspeedMode::TrueAirspeed => AirspeedInput::True(speed(airspeed_mode)?),
        AirspeedMode::CalibratedAirspeed => AirspeedInput::Calibrated(speed(airspeed_mode)?),
        AirspeedMode::EquivalentAirspeed => AirspeedInput::Equivalent(speed(airspeed_mode)?),
    };

    let length = match length_mode {
        LengthMode::Length => LengthInput::Length(tagged(
            length_mode.key(),
            QuantityKind::Length,
            length_mode.units(),
            length_value,
            length_unit,
        )?),
        LengthMode::ReynoldsNumber => {
            LengthInput::Reynolds(check_magnitude(length_mode.key(), length_value)?)
        }
    };

    Ok(Query {
        altitude,
        airspeed,
        length,
    })
}

/// UI 호스트가 넘긴 모드 문자열로 질의를 만든다. 모드 문자열이 틀리면 `InvalidMode`.
#[allow(clippy::too_many_arguments)]
pub fn resolve_labels(
    altitude_mode: &str,
    altitude_value: f64,
    altitude_unit: &str,
    airspeed_mode: &str,
    airspeed_value: f64,
    airspeed_unit: &str,
    length_mode: &str,
    length_value: f64,
    length_unit: &str,
) -> Result<Query, ResolveError> {
    resolve(
        altitude_mode.parse()?,
        altitude_value,
        altitude_unit,
        airspeed_mode.parse()?,
        airspeed_value,
        airspeed_unit,
        length_mode.parse()?,
        length_value,
        length_unit,
    )
}
