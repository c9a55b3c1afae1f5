use serde::{Deserialize, Serialize};

use crate::i18n::{keys, Translator};

/// 결과 표에 붙는 표시 단위. 통화 기호는 설정에서 받는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayUnit {
    /// 단위 없음 (비율)
    Dimensionless,
    /// 전력량 [kWh]
    Kwh,
    /// 금액
    Currency,
    /// 월 금액
    CurrencyPerMonth,
    /// 전력량 단가
    CurrencyPerKwh,
}

impl DisplayUnit {
    /// 표에 들어갈 단위 문자열을 만든다.
    pub fn label(self, currency: &str, tr: &Translator) -> String {
        match self {
            DisplayUnit::Dimensionless => String::new(),
            DisplayUnit::Kwh => "kWh".to_string(),
            DisplayUnit::Currency => currency.to_string(),
            DisplayUnit::CurrencyPerMonth => format!("{currency}/{}", tr.t(keys::UNIT_MONTH)),
            DisplayUnit::CurrencyPerKwh => format!("{currency}/kWh"),
        }
    }
}
