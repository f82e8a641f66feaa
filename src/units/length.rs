use super::{FOOT_M, INCH_M};

/// 길이(고도 포함) 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Kilofoot,
    Foot,
    Inch,
    Kilometer,
    Meter,
    Millimeter,
}

impl LengthUnit {
    /// 표시용 단위 문자열.
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Kilofoot => "kft",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
            LengthUnit::Kilometer => "km",
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
        }
    }

    /// 1 단위가 몇 미터인지 반환한다.
    pub(crate) fn meters(self) -> f64 {
        match self {
            LengthUnit::Kilofoot => FOOT_M * 1000.0,
            LengthUnit::Foot => FOOT_M,
            LengthUnit::Inch => INCH_M,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
        }
    }
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    value * unit.meters()
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    value_m / unit.meters()
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
