use super::{FOOT_M, SLUG_KG};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnit {
    SlugPerCubicFoot,
    PoundMassPerCubicFoot,
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
}

const CUBIC_FOOT_M3: f64 = FOOT_M * FOOT_M * FOOT_M;
const POUND_MASS_KG: f64 = 0.453_592_37;

impl DensityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::SlugPerCubicFoot => "slug/ft^3",
            DensityUnit::PoundMassPerCubicFoot => "lbm/ft^3",
            DensityUnit::KilogramPerCubicMeter => "kg/m^3",
            DensityUnit::GramPerCubicCentimeter => "g/cm^3",
        }
    }
}

fn to_base(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::SlugPerCubicFoot => value * SLUG_KG / CUBIC_FOOT_M3,
        DensityUnit::PoundMassPerCubicFoot => value * POUND_MASS_KG / CUBIC_FOOT_M3,
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value * 1000.0,
    }
}

fn from_base(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::SlugPerCubicFoot => value * CUBIC_FOOT_M3 / SLUG_KG,
        DensityUnit::PoundMassPerCubicFoot => value * CUBIC_FOOT_M3 / POUND_MASS_KG,
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value / 1000.0,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
