//! 입력 그룹별 모드 선택(고도, 대기속도, 길이)을 정의한다.
use std::str::FromStr;

use crate::config::UnitSystem;
use crate::quantity::QuantityKind;
use crate::query::QueryKey;

/// 고도/고도계 입력 단위 후보.
pub const ALTITUDE_INPUT_UNITS: &[&str] = &["kft", "ft", "km", "m"];
/// 기압고도 입력 단위 후보. 모드에 따라 단위 집합 자체가 바뀐다.
pub const PRESSURE_ALTITUDE_INPUT_UNITS: &[&str] = &["lbf/ft^2", "lbf/in^2", "Pa", "kPa"];
pub const AIRSPEED_INPUT_UNITS: &[&str] = &["knots", "ft/s", "km/hr", "m/s"];
pub const LENGTH_INPUT_UNITS: &[&str] = &["ft", "in", "m", "mm"];

/// 모드 그룹 구분. 오류 메시지와 세션 키에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeGroup {
    Altitude,
    Airspeed,
    Length,
}

impl ModeGroup {
    pub fn name(self) -> &'static str {
        match self {
            ModeGroup::Altitude => "altitude",
            ModeGroup::Airspeed => "airspeed",
            ModeGroup::Length => "length",
        }
    }
}

/// 인식할 수 없는 모드 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMode {
    pub group: ModeGroup,
    pub value: String,
}

impl std::fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 {} 모드: {}", self.group.name(), self.value)
    }
}

impl std::error::Error for InvalidMode {}

/// 고도 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeMode {
    GeometricAltitude,
    GeopotentialAltitude,
    PressureAltitude,
}

/// 대기속도 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirspeedMode {
    MachNumber,
    TrueAirspeed,
    CalibratedAirspeed,
    EquivalentAirspeed,
}

/// 특성 길이 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMode {
    Length,
    ReynoldsNumber,
}

impl AltitudeMode {
    pub const ALL: [AltitudeMode; 3] = [
        AltitudeMode::GeometricAltitude,
        AltitudeMode::GeopotentialAltitude,
        AltitudeMode::PressureAltitude,
    ];

    /// UI 호스트가 표시하는 선택지 문자열.
    pub fn label(self) -> &'static str {
        match self {
            AltitudeMode::GeometricAltitude => "Geometric Altitude",
            AltitudeMode::GeopotentialAltitude => "Geopotential Altitude",
            AltitudeMode::PressureAltitude => "Pressure Altitude",
        }
    }

    pub fn key(self) -> QueryKey {
        match self {
            AltitudeMode::GeometricAltitude => QueryKey::GeometricAltitude,
            AltitudeMode::GeopotentialAltitude => QueryKey::GeopotentialAltitude,
            AltitudeMode::PressureAltitude => QueryKey::Pressure,
        }
    }

    pub fn kind(self) -> QuantityKind {
        match self {
            AltitudeMode::GeometricAltitude | AltitudeMode::GeopotentialAltitude => {
                QuantityKind::Length
            }
            AltitudeMode::PressureAltitude => QuantityKind::Pressure,
        }
    }

    /// 모드별로 허용되는 입력 단위.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            AltitudeMode::GeometricAltitude | AltitudeMode::GeopotentialAltitude => {
                ALTITUDE_INPUT_UNITS
            }
            AltitudeMode::PressureAltitude => PRESSURE_ALTITUDE_INPUT_UNITS,
        }
    }

    pub fn default_unit(self, system: UnitSystem) -> &'static str {
        let units = self.units();
        match system {
            UnitSystem::US => units[0],
            UnitSystem::SI => units[2],
        }
    }
}

impl AirspeedMode {
    pub const ALL: [AirspeedMode; 4] = [
        AirspeedMode::MachNumber,
        AirspeedMode::TrueAirspeed,
        AirspeedMode::CalibratedAirspeed,
        AirspeedMode::EquivalentAirspeed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AirspeedMode::MachNumber => "Mach Number",
            AirspeedMode::TrueAirspeed => "True Airspeed",
            AirspeedMode::CalibratedAirspeed => "Calibrated Airspeed",
            AirspeedMode::EquivalentAirspeed => "Equivalent Airspeed",
        }
    }

    pub fn key(self) -> QueryKey {
        match self {
            AirspeedMode::MachNumber => QueryKey::Mach,
            AirspeedMode::TrueAirspeed => QueryKey::TrueAirspeed,
            AirspeedMode::CalibratedAirspeed => QueryKey::CalibratedAirspeed,
            AirspeedMode::EquivalentAirspeed => QueryKey::EquivalentAirspeed,
        }
    }

    /// 마하수는 무차원이므로 단위 선택지가 없다.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            AirspeedMode::MachNumber => &[],
            _ => AIRSPEED_INPUT_UNITS,
        }
    }

    pub fn default_unit(self, system: UnitSystem) -> Option<&'static str> {
        let units = self.units();
        match (units.is_empty(), system) {
            (true, _) => None,
            (false, UnitSystem::US) => Some(units[0]),
            (false, UnitSystem::SI) => Some(units[3]),
        }
    }
}

impl LengthMode {
    pub const ALL: [LengthMode; 2] = [LengthMode::Length, LengthMode::ReynoldsNumber];

    pub fn label(self) -> &'static str {
        match self {
            LengthMode::Length => "Length",
            LengthMode::ReynoldsNumber => "Reynolds Number",
        }
    }

    pub fn key(self) -> QueryKey {
        match self {
            LengthMode::Length => QueryKey::Length,
            LengthMode::ReynoldsNumber => QueryKey::Reynolds,
        }
    }

    pub fn units(self) -> &'static [&'static str] {
        match self {
            LengthMode::Length => LENGTH_INPUT_UNITS,
            LengthMode::ReynoldsNumber => &[],
        }
    }

    pub fn default_unit(self, system: UnitSystem) -> Option<&'static str> {
        match (self, system) {
            (LengthMode::ReynoldsNumber, _) => None,
            (LengthMode::Length, UnitSystem::US) => Some(LENGTH_INPUT_UNITS[0]),
            (LengthMode::Length, UnitSystem::SI) => Some(LENGTH_INPUT_UNITS[2]),
        }
    }
}

/// 표시 문자열(대소문자 무시) 또는 질의 키(대소문자 구분)로 모드를 찾는다.
fn parse_mode<M: Copy>(
    group: ModeGroup,
    all: &[M],
    label: impl Fn(M) -> &'static str,
    key: impl Fn(M) -> QueryKey,
    s: &str,
) -> Result<M, InvalidMode> {
    let trimmed = s.trim();
    all.iter()
        .copied()
        .find(|m| label(*m).eq_ignore_ascii_case(trimmed) || key(*m).as_str() == trimmed)
        .ok_or_else(|| InvalidMode {
            group,
            value: s.to_string(),
        })
}

impl FromStr for AltitudeMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(ModeGroup::Altitude, &Self::ALL, Self::label, Self::key, s)
    }
}

impl FromStr for AirspeedMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(ModeGroup::Airspeed, &Self::ALL, Self::label, Self::key, s)
    }
}

impl FromStr for LengthMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(ModeGroup::Length, &Self::ALL, Self::label, Self::key, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_keys_parse_back() {
        for mode in AltitudeMode::ALL {
            assert_eq!(mode.label().parse::<AltitudeMode>(), Ok(mode));
            assert_eq!(mode.key().as_str().parse::<AltitudeMode>(), Ok(mode));
        }
        for mode in AirspeedMode::ALL {
            assert_eq!(mode.label().parse::<AirspeedMode>(), Ok(mode));
        }
        for mode in LengthMode::ALL {
            assert_eq!(mode.label().parse::<LengthMode>(), Ok(mode));
        }
    }

    #[test]
    fn altitude_keys_are_case_sensitive() {
        assert_eq!("h".parse(), Ok(AltitudeMode::GeometricAltitude));
        assert_eq!("H".parse(), Ok(AltitudeMode::GeopotentialAltitude));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "Density Altitude".parse::<AltitudeMode>().unwrap_err();
        assert_eq!(err.group, ModeGroup::Altitude);
        assert_eq!(err.value, "Density Altitude");
        assert!("".parse::<LengthMode>().is_err());
    }

    #[test]
    fn pressure_altitude_switches_unit_set() {
        assert_eq!(AltitudeMode::PressureAltitude.default_unit(UnitSystem::US), "lbf/ft^2");
        assert_eq!(AltitudeMode::PressureAltitude.default_unit(UnitSystem::SI), "Pa");
        assert_eq!(AltitudeMode::GeometricAltitude.default_unit(UnitSystem::SI), "km");
        assert_eq!(AirspeedMode::MachNumber.default_unit(UnitSystem::US), None);
        assert_eq!(AirspeedMode::TrueAirspeed.default_unit(UnitSystem::SI), Some("m/s"));
    }
}
