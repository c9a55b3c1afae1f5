//! 입력 문서 값을 느슨하게 숫자로 변환한다.
//!
//! 숫자, `.` 또는 `,` 소수점 문자열을 모두 받아들이며 어떤 경우에도 오류를 내지 않는다.
//! 변환할 수 없으면 호출자가 넘긴 기본값을 돌려준다.

use serde_json::Value;

/// JSON 값을 유한한 실수로 변환한다. 값이 없거나 숫자가 아니면 `fallback`을 반환한다.
pub fn as_num(value: Option<&Value>, fallback: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_lenient(s),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => {
            if value.is_some_and(|v| !v.is_null()) {
                tracing::debug!(?value, fallback, "non-numeric value replaced by fallback");
            }
            fallback
        }
    }
}

/// 문자열을 숫자로 해석한다.
///
/// 첫 번째 `,`만 `.`으로 바꾼 뒤 앞쪽 공백을 건너뛰고 가장 긴 숫자 접두어를 읽는다.
/// 뒤에 붙은 문자(`"12 kWh"`)는 무시한다. 접두어가 없거나 무한대면 `None`.
pub fn parse_lenient(text: &str) -> Option<f64> {
    let normalized = text.replacen(',', ".", 1);
    let prefix = numeric_prefix(normalized.trim_start());
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 부호, 정수부, 소수부, 지수부로 이루어진 가장 긴 접두어를 잘라낸다.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) {
        1
    } else {
        0
    };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_start = end + 1;
        if exp_start < len && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    &s[..end]
}

/// 값이 "참"으로 취급되는지 판단한다. 레거시 필드 대체 규칙에서 사용한다.
///
/// 없음, `null`, `false`, `0`, 빈 문자열은 거짓이고 나머지는 모두 참이다.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
