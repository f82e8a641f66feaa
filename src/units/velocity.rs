use super::FOOT_M;

/// 속도(대기속도) 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityUnit {
    Knot,
    FootPerSecond,
    MilePerHour,
    KilometerPerHour,
    MeterPerSecond,
}

const KNOT_MPS: f64 = 1852.0 / 3600.0;
const MPH_MPS: f64 = 1609.344 / 3600.0;

impl VelocityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::Knot => "knots",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::MilePerHour => "mph",
            VelocityUnit::KilometerPerHour => "km/hr",
            VelocityUnit::MeterPerSecond => "m/s",
        }
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value * FOOT_M,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::Knot => value * KNOT_MPS,
        VelocityUnit::MilePerHour => value * MPH_MPS,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value / FOOT_M,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::Knot => value / KNOT_MPS,
        VelocityUnit::MilePerHour => value / MPH_MPS,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
