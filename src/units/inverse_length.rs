use super::LengthUnit;

/// 길이의 역수 단위(단위 길이당 레이놀즈 수 등). 내부 기준은 1/m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InverseLengthUnit {
    PerFoot,
    PerInch,
    PerMeter,
    PerMillimeter,
}

impl InverseLengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            InverseLengthUnit::PerFoot => "1/ft",
            InverseLengthUnit::PerInch => "1/in",
            InverseLengthUnit::PerMeter => "1/m",
            InverseLengthUnit::PerMillimeter => "1/mm",
        }
    }

    fn length(self) -> LengthUnit {
        match self {
            InverseLengthUnit::PerFoot => LengthUnit::Foot,
            InverseLengthUnit::PerInch => LengthUnit::Inch,
            InverseLengthUnit::PerMeter => LengthUnit::Meter,
            InverseLengthUnit::PerMillimeter => LengthUnit::Millimeter,
        }
    }
}

/// 길이의 역수를 변환한다. 분모 길이 배율의 역수를 곱한다.
pub fn convert_inverse_length(
    value: f64,
    from: InverseLengthUnit,
    to: InverseLengthUnit,
) -> f64 {
    let per_m = value / from.length().meters();
    per_m * to.length().meters()
}
