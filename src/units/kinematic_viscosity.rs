use super::FOOT_M;

/// 동점성계수 단위. 내부 기준은 m²/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicViscosityUnit {
    SquareFootPerSecond,
    SquareMeterPerSecond,
}

impl KinematicViscosityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            KinematicViscosityUnit::SquareFootPerSecond => "ft^2/s",
            KinematicViscosityUnit::SquareMeterPerSecond => "m^2/s",
        }
    }
}

fn to_base(value: f64, unit: KinematicViscosityUnit) -> f64 {
    match unit {
        KinematicViscosityUnit::SquareFootPerSecond => value * FOOT_M * FOOT_M,
        KinematicViscosityUnit::SquareMeterPerSecond => value,
    }
}

fn from_base(value: f64, unit: KinematicViscosityUnit) -> f64 {
    match unit {
        KinematicViscosityUnit::SquareFootPerSecond => value / (FOOT_M * FOOT_M),
        KinematicViscosityUnit::SquareMeterPerSecond => value,
    }
}

/// 동점성계수를 변환한다.
pub fn convert_kinematic_viscosity(
    value: f64,
    from: KinematicViscosityUnit,
    to: KinematicViscosityUnit,
) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
