use super::FOOT_M;

/// 가속도 단위. 내부 기준은 m/s²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelerationUnit {
    FootPerSecondSquared,
    MeterPerSecondSquared,
}

impl AccelerationUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            AccelerationUnit::FootPerSecondSquared => "ft/s^2",
            AccelerationUnit::MeterPerSecondSquared => "m/s^2",
        }
    }
}

/// 가속도를 변환한다.
pub fn convert_acceleration(value: f64, from: AccelerationUnit, to: AccelerationUnit) -> f64 {
    let base = match from {
        AccelerationUnit::FootPerSecondSquared => value * FOOT_M,
        AccelerationUnit::MeterPerSecondSquared => value,
    };
    match to {
        AccelerationUnit::FootPerSecondSquared => base / FOOT_M,
        AccelerationUnit::MeterPerSecondSquared => base,
    }
}
