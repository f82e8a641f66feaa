use super::{FOOT_M, POUND_FORCE_N};

/// 점성계수(동점도 아님) 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViscosityUnit {
    PoundForceSecondPerSquareFoot,
    NewtonSecondPerSquareMeter,
    PascalSecond,
}

const PAS_PER_LBF_S_FT2: f64 = POUND_FORCE_N / (FOOT_M * FOOT_M);

impl ViscosityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PoundForceSecondPerSquareFoot => "lbf*s/ft^2",
            ViscosityUnit::NewtonSecondPerSquareMeter => "N*s/m^2",
            ViscosityUnit::PascalSecond => "Pa*s",
        }
    }
}

fn to_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PoundForceSecondPerSquareFoot => value * PAS_PER_LBF_S_FT2,
        ViscosityUnit::NewtonSecondPerSquareMeter | ViscosityUnit::PascalSecond => value,
    }
}

fn from_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PoundForceSecondPerSquareFoot => value / PAS_PER_LBF_S_FT2,
        ViscosityUnit::NewtonSecondPerSquareMeter | ViscosityUnit::PascalSecond => value,
    }
}

/// 점성계수를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let base = to_pas(value, from);
    from_pas(base, to)
}
