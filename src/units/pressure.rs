use super::{FOOT_M, INCH_M, POUND_FORCE_N};

/// 압력 단위. 내부 기준은 Pa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureUnit {
    PoundPerSquareFoot,
    PoundPerSquareInch,
    InchMercury,
    Atmosphere,
    Pascal,
    KiloPascal,
}

const PA_PER_PSF: f64 = POUND_FORCE_N / (FOOT_M * FOOT_M);
const PA_PER_PSI: f64 = POUND_FORCE_N / (INCH_M * INCH_M);
// 0 °C 수은주 기준
const PA_PER_INHG: f64 = 3_386.389;
const PA_PER_ATM: f64 = 101_325.0;

impl PressureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::PoundPerSquareFoot => "lbf/ft^2",
            PressureUnit::PoundPerSquareInch => "lbf/in^2",
            PressureUnit::InchMercury => "inHg",
            PressureUnit::Atmosphere => "atm",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
        }
    }

    fn pascals(self) -> f64 {
        match self {
            PressureUnit::PoundPerSquareFoot => PA_PER_PSF,
            PressureUnit::PoundPerSquareInch => PA_PER_PSI,
            PressureUnit::InchMercury => PA_PER_INHG,
            PressureUnit::Atmosphere => PA_PER_ATM,
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1000.0,
        }
    }
}

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    value * unit.pascals()
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    value_pa / unit.pascals()
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
