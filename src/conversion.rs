use crate::quantity::{QuantityKind, UnitTaggedValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 해당 물리량 어휘에 없는 단위 문자열
    UnknownUnit { kind: QuantityKind, unit: String },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit { kind, unit } => {
                write!(f, "알 수 없는 {} 단위: {unit}", kind.name())
            }
        }
    }
}

impl std::error::Error for ConversionError {}

pub const LENGTH_UNITS: &[&str] = &["kft", "ft", "in", "km", "m", "mm"];
pub const PRESSURE_UNITS: &[&str] = &["lbf/ft^2", "lbf/in^2", "inHg", "atm", "Pa", "kPa"];
pub const TEMPERATURE_UNITS: &[&str] = &["degR", "degF", "K", "degC"];
pub const DENSITY_UNITS: &[&str] = &["slug/ft^3", "lbm/ft^3", "kg/m^3", "g/cm^3"];
pub const VISCOSITY_UNITS: &[&str] = &["lbf*s/ft^2", "N*s/m^2", "Pa*s"];
pub const KINEMATIC_VISCOSITY_UNITS: &[&str] = &["ft^2/s", "m^2/s"];
pub const CONDUCTIVITY_UNITS: &[&str] = &["slug*ft/s^3/degR", "W/m/K"];
pub const ACCELERATION_UNITS: &[&str] = &["ft/s^2", "m/s^2"];
pub const VELOCITY_UNITS: &[&str] = &["knots", "ft/s", "mph", "km/hr", "m/s"];
pub const INVERSE_LENGTH_UNITS: &[&str] = &["1/ft", "1/in", "1/m", "1/mm"];

/// 물리량별로 인식하는 정규 단위 표기 목록을 반환한다.
pub fn vocabulary(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Length => LENGTH_UNITS,
        QuantityKind::Pressure => PRESSURE_UNITS,
        QuantityKind::Temperature => TEMPERATURE_UNITS,
        QuantityKind::Density => DENSITY_UNITS,
        QuantityKind::Viscosity => VISCOSITY_UNITS,
        QuantityKind::KinematicViscosity => KINEMATIC_VISCOSITY_UNITS,
        QuantityKind::ThermalConductivity => CONDUCTIVITY_UNITS,
        QuantityKind::Acceleration => ACCELERATION_UNITS,
        QuantityKind::Velocity => VELOCITY_UNITS,
        QuantityKind::InverseLength => INVERSE_LENGTH_UNITS,
    }
}

/// 단위 문자열(별칭 포함)을 정규 표기로 바꾼다.
pub fn canonical_unit(kind: QuantityKind, unit: &str) -> Result<&'static str, ConversionError> {
    let symbol = match kind {
        QuantityKind::Length => parse_length_unit(kind, unit)?.symbol(),
        QuantityKind::Pressure => parse_pressure_unit(kind, unit)?.symbol(),
        QuantityKind::Temperature => parse_temperature_unit(kind, unit)?.symbol(),
        QuantityKind::Density => parse_density_unit(kind, unit)?.symbol(),
        QuantityKind::Viscosity => parse_viscosity_unit(kind, unit)?.symbol(),
        QuantityKind::KinematicViscosity => parse_kinematic_viscosity_unit(kind, unit)?.symbol(),
        QuantityKind::ThermalConductivity => parse_conductivity_unit(kind, unit)?.symbol(),
        QuantityKind::Acceleration => parse_acceleration_unit(kind, unit)?.symbol(),
        QuantityKind::Velocity => parse_velocity_unit(kind, unit)?.symbol(),
        QuantityKind::InverseLength => parse_inverse_length_unit(kind, unit)?.symbol(),
    };
    Ok(symbol)
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `kft`, `lbf/ft^2`, `degR`, `knots`, `1/in` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(kind, from_unit_str)?;
            let to = parse_length_unit(kind, to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(kind, from_unit_str)?;
            let to = parse_pressure_unit(kind, to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(kind, from_unit_str)?;
            let to = parse_temperature_unit(kind, to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(kind, from_unit_str)?;
            let to = parse_density_unit(kind, to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(kind, from_unit_str)?;
            let to = parse_viscosity_unit(kind, to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
        QuantityKind::KinematicViscosity => {
            let from = parse_kinematic_viscosity_unit(kind, from_unit_str)?;
            let to = parse_kinematic_viscosity_unit(kind, to_unit_str)?;
            Ok(convert_kinematic_viscosity(value, from, to))
        }
        QuantityKind::ThermalConductivity => {
            let from = parse_conductivity_unit(kind, from_unit_str)?;
            let to = parse_conductivity_unit(kind, to_unit_str)?;
            Ok(convert_conductivity(value, from, to))
        }
        QuantityKind::Acceleration => {
            let from = parse_acceleration_unit(kind, from_unit_str)?;
            let to = parse_acceleration_unit(kind, to_unit_str)?;
            Ok(convert_acceleration(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(kind, from_unit_str)?;
            let to = parse_velocity_unit(kind, to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::InverseLength => {
            let from = parse_inverse_length_unit(kind, from_unit_str)?;
            let to = parse_inverse_length_unit(kind, to_unit_str)?;
            Ok(convert_inverse_length(value, from, to))
        }
    }
}

/// 단위가 붙은 값을 목표 단위의 크기로 환산한다.
pub fn convert_value(value: &UnitTaggedValue, to_unit_str: &str) -> Result<f64, ConversionError> {
    convert(value.kind, value.magnitude, value.unit, to_unit_str)
}

fn unknown(kind: QuantityKind, s: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        kind,
        unit: s.to_string(),
    }
}

fn parse_length_unit(kind: QuantityKind, s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kft" => Ok(LengthUnit::Kilofoot),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "km" => Ok(LengthUnit::Kilometer),
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_pressure_unit(kind: QuantityKind, s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "lbf/ft^2" | "lbf/ft2" | "psf" => Ok(PressureUnit::PoundPerSquareFoot),
        "lbf/in^2" | "lbf/in2" | "psi" => Ok(PressureUnit::PoundPerSquareInch),
        "inhg" => Ok(PressureUnit::InchMercury),
        "atm" => Ok(PressureUnit::Atmosphere),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_temperature_unit(kind: QuantityKind, s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "degr" | "r" | "rankine" | "°r" => Ok(TemperatureUnit::Rankine),
        "degf" | "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "degc" | "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_density_unit(kind: QuantityKind, s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "slug/ft^3" | "slug/ft3" => Ok(DensityUnit::SlugPerCubicFoot),
        "lbm/ft^3" | "lbm/ft3" | "lb/ft^3" => Ok(DensityUnit::PoundMassPerCubicFoot),
        "kg/m^3" | "kg/m3" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/cm^3" | "g/cm3" => Ok(DensityUnit::GramPerCubicCentimeter),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_viscosity_unit(kind: QuantityKind, s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "lbf*s/ft^2" | "slug/ft/s" => Ok(ViscosityUnit::PoundForceSecondPerSquareFoot),
        "n*s/m^2" => Ok(ViscosityUnit::NewtonSecondPerSquareMeter),
        "pa*s" | "pa·s" | "pa.s" => Ok(ViscosityUnit::PascalSecond),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_kinematic_viscosity_unit(
    kind: QuantityKind,
    s: &str,
) -> Result<KinematicViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ft^2/s" | "ft2/s" => Ok(KinematicViscosityUnit::SquareFootPerSecond),
        "m^2/s" | "m2/s" => Ok(KinematicViscosityUnit::SquareMeterPerSecond),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_conductivity_unit(kind: QuantityKind, s: &str) -> Result<ConductivityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "slug*ft/s^3/degr" | "lbf/s/degr" => Ok(ConductivityUnit::SlugFootPerCubicSecondRankine),
        "w/m/k" | "w/mk" | "w/(m·k)" => Ok(ConductivityUnit::WPerMeterK),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_acceleration_unit(kind: QuantityKind, s: &str) -> Result<AccelerationUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ft/s^2" | "ft/s2" => Ok(AccelerationUnit::FootPerSecondSquared),
        "m/s^2" | "m/s2" => Ok(AccelerationUnit::MeterPerSecondSquared),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_velocity_unit(kind: QuantityKind, s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "knots" | "knot" | "kts" | "kt" => Ok(VelocityUnit::Knot),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "mph" => Ok(VelocityUnit::MilePerHour),
        "km/hr" | "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        _ => Err(unknown(kind, s)),
    }
}

fn parse_inverse_length_unit(
    kind: QuantityKind,
    s: &str,
) -> Result<InverseLengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "1/ft" => Ok(InverseLengthUnit::PerFoot),
        "1/in" => Ok(InverseLengthUnit::PerInch),
        "1/m" => Ok(InverseLengthUnit::PerMeter),
        "1/mm" => Ok(InverseLengthUnit::PerMillimeter),
        _ => Err(unknown(kind, s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [QuantityKind; 10] = [
        QuantityKind::Length,
        QuantityKind::Pressure,
        QuantityKind::Temperature,
        QuantityKind::Density,
        QuantityKind::Viscosity,
        QuantityKind::KinematicViscosity,
        QuantityKind::ThermalConductivity,
        QuantityKind::Acceleration,
        QuantityKind::Velocity,
        QuantityKind::InverseLength,
    ];

    #[test]
    fn every_vocabulary_entry_is_its_own_canonical_form() {
        for kind in ALL_KINDS {
            for unit in vocabulary(kind) {
                assert_eq!(canonical_unit(kind, unit), Ok(*unit), "{kind:?} {unit}");
            }
        }
    }

    #[test]
    fn aliases_map_to_canonical_symbols() {
        assert_eq!(canonical_unit(QuantityKind::Pressure, "psf"), Ok("lbf/ft^2"));
        assert_eq!(canonical_unit(QuantityKind::Velocity, " kts "), Ok("knots"));
        assert_eq!(canonical_unit(QuantityKind::Temperature, "°C"), Ok("degC"));
    }

    #[test]
    fn unit_from_other_dimension_is_rejected() {
        let err = convert(QuantityKind::Pressure, 1.0, "ft", "Pa").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                kind: QuantityKind::Pressure,
                unit: "ft".into()
            }
        );
    }
}
