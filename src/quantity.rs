use serde::Serialize;

use crate::conversion::{self, ConversionError};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuantityKind {
    /// 길이와 고도
    Length,
    Pressure,
    Temperature,
    Density,
    /// 점성계수
    Viscosity,
    KinematicViscosity,
    ThermalConductivity,
    Acceleration,
    /// 대기속도와 음속
    Velocity,
    /// 단위 길이당 레이놀즈 수
    InverseLength,
}

impl QuantityKind {
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Density => "density",
            QuantityKind::Viscosity => "dynamic viscosity",
            QuantityKind::KinematicViscosity => "kinematic viscosity",
            QuantityKind::ThermalConductivity => "thermal conductivity",
            QuantityKind::Acceleration => "acceleration",
            QuantityKind::Velocity => "velocity",
            QuantityKind::InverseLength => "inverse length",
        }
    }
}

/// 단위가 붙은 값.
///
/// `unit`은 항상 해당 `kind` 어휘의 정규 표기(`kft`, `lbf/ft^2`, `knots` 등)로 저장한다.
/// 별칭(`psf`, `kts` 등)으로 생성해도 정규 표기로 바뀐다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTaggedValue {
    pub kind: QuantityKind,
    pub magnitude: f64,
    pub unit: &'static str,
}

impl UnitTaggedValue {
    /// 단위 문자열을 검증하여 값을 만든다.
    pub fn new(kind: QuantityKind, magnitude: f64, unit: &str) -> Result<Self, ConversionError> {
        let unit = conversion::canonical_unit(kind, unit)?;
        Ok(Self {
            kind,
            magnitude,
            unit,
        })
    }

    /// 다른 단위로 환산한 크기를 반환한다.
    pub fn to(&self, unit: &str) -> Result<f64, ConversionError> {
        conversion::convert_value(self, unit)
    }

    /// 다른 단위로 환산한 새 값을 반환한다.
    pub fn converted(&self, unit: &str) -> Result<UnitTaggedValue, ConversionError> {
        let magnitude = self.to(unit)?;
        UnitTaggedValue::new(self.kind, magnitude, unit)
    }
}

impl std::fmt::Display for UnitTaggedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
