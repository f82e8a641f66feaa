//! C `%g` 규칙을 따르는 수치 표시 서식.

/// 표시 폭.
pub const DISPLAY_WIDTH: usize = 8;
/// 유효 숫자 개수.
pub const DISPLAY_PRECISION: usize = 5;

/// 출력 항목 표시에 쓰는 `%8.5g` 서식.
pub fn format_display(value: f64) -> String {
    format_g(value, DISPLAY_WIDTH, DISPLAY_PRECISION)
}

/// `%{width}.{precision}g`와 같은 문자열을 만든다.
///
/// 반올림 후 지수가 -4 미만이거나 `precision` 이상이면 지수 표기를, 아니면 고정 소수점
/// 표기를 쓰고, 두 경우 모두 뒤쪽 0과 소수점을 지운다. 폭보다 짧으면 오른쪽 정렬한다.
pub fn format_g(value: f64, width: usize, precision: usize) -> String {
    let body = general(value, precision.max(1));
    format!("{body:>width$}")
}

fn general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // 지수는 반올림된 가수 기준으로 정해야 한다 (99999.5 -> 1e+05)
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
