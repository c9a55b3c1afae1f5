//! 로케일별 숫자 표기.

use serde::{Deserialize, Serialize};

/// 값이 없거나 NaN일 때 표시하는 문자.
pub const MISSING_PLACEHOLDER: &str = "—";

/// 숫자 표기 관례.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    /// 소수점 `,`, 천 단위 좁은 공백(U+202F)
    Fr,
    /// 소수점 `.`, 천 단위 `,`
    En,
}

impl NumberLocale {
    fn decimal_separator(self) -> char {
        match self {
            NumberLocale::Fr => ',',
            NumberLocale::En => '.',
        }
    }

    fn group_separator(self) -> char {
        match self {
            NumberLocale::Fr => '\u{202F}',
            NumberLocale::En => ',',
        }
    }
}

/// 최대 소수 자릿수를 갖는 숫자 포매터.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub locale: NumberLocale,
    pub max_fraction_digits: usize,
}

impl NumberFormat {
    pub fn new(locale: NumberLocale, max_fraction_digits: usize) -> Self {
        Self {
            locale,
            max_fraction_digits,
        }
    }

    /// 값을 문자열로 만든다.
    ///
    /// 가장 짧은 십진 표현을 기준으로 반올림(0.5는 0에서 멀어지는 쪽)하고
    /// 뒤쪽 0은 지운다. 음수는 0으로 반올림되어도 부호를 유지한다(`-0`).
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return MISSING_PLACEHOLDER.to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let repr = format!("{}", value.abs());
        let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        let (int_digits, frac_digits) =
            round_digits(int_part, frac_part, self.max_fraction_digits);
        let frac_digits = frac_digits.trim_end_matches('0');

        let mut out = String::new();
        if value.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&group_thousands(&int_digits, self.locale.group_separator()));
        if !frac_digits.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(frac_digits);
        }
        out
    }
}

/// 십진 문자열을 `keep`자리 소수로 반올림한다. 정수부가 한 자리 늘어날 수 있다.
fn round_digits(int_part: &str, frac_part: &str, keep: usize) -> (String, String) {
    if frac_part.len() <= keep {
        return (int_part.to_string(), frac_part.to_string());
    }
    let round_up = frac_part.as_bytes()[keep] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(keep))
        .collect();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }
    let split = digits.len() - keep;
    let text = String::from_utf8_lossy(&digits).into_owned();
    (text[..split].to_string(), text[split..].to_string())
}

fn group_thousands(int_digits: &str, separator: char) -> String {
    let len = int_digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in int_digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
