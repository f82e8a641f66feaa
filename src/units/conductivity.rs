use super::POUND_FORCE_N;

/// 열전도율(k) 단위. 내부 기준은 W/m·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConductivityUnit {
    SlugFootPerCubicSecondRankine,
    WPerMeterK,
}

// slug·ft/s³ = lbf/s, 1 K = 1.8 °R
const W_PER_M_K_PER_US: f64 = POUND_FORCE_N * 1.8;

impl ConductivityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ConductivityUnit::SlugFootPerCubicSecondRankine => "slug*ft/s^3/degR",
            ConductivityUnit::WPerMeterK => "W/m/K",
        }
    }
}

fn to_base(value: f64, unit: ConductivityUnit) -> f64 {
    match unit {
        ConductivityUnit::WPerMeterK => value,
        ConductivityUnit::SlugFootPerCubicSecondRankine => value * W_PER_M_K_PER_US,
    }
}

fn from_base(value: f64, unit: ConductivityUnit) -> f64 {
    match unit {
        ConductivityUnit::WPerMeterK => value,
        ConductivityUnit::SlugFootPerCubicSecondRankine => value / W_PER_M_K_PER_US,
    }
}

/// 열전도율을 변환한다.
pub fn convert_conductivity(value: f64, from: ConductivityUnit, to: ConductivityUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
