use serde::Serialize;
use serde_json::Value;

use crate::coercion::{as_num, is_truthy};

/// 상승률이 지정되지 않았을 때 사용하는 연간 전기요금 상승률.
pub const DEFAULT_PRICE_INFLATION: f64 = 0.05;
/// 기본 분석 기간 [년].
pub const DEFAULT_HORIZON_YEARS: f64 = 20.0;

/// 태양광 경제성 계산 입력.
///
/// 필드명은 입력 문서(JSON)의 키를 그대로 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarInput {
    /// 월 전기요금 [통화/월]
    pub facture: f64,
    /// 전력량 단가 [통화/kWh]
    pub tarif: f64,
    /// 연간 소비 중 주간 비율 (0~1)
    pub ratiojour: f64,
    /// 설치 kW당 연간 발전량 [kWh/kW/년]
    pub productible: f64,
    /// 설치 용량 [kW]
    pub puissance: f64,
    /// 잉여 전력 판매 단가 [통화/kWh]
    pub tarifrevente: f64,
    /// 연간 전기요금 상승률 (0~1)
    pub hausselecgraph: f64,
    /// 분석 기간 [년]
    pub periodeans: f64,
}

impl Default for SolarInput {
    fn default() -> Self {
        Self {
            facture: 0.0,
            tarif: 0.0,
            ratiojour: 0.0,
            productible: 0.0,
            puissance: 0.0,
            tarifrevente: 0.0,
            hausselecgraph: DEFAULT_PRICE_INFLATION,
            periodeans: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl SolarInput {
    /// 원시 입력 문서에서 입력값을 만든다. 형태가 잘못되어도 실패하지 않는다.
    ///
    /// - `tarif`: 레거시 키 `tarin`이 참 값이면 그것을 우선 사용한다.
    /// - `hausselecgraph`: 없으면 레거시 `hausselec`(0이 아닐 때), 그마저 없으면 0.05.
    /// - `periodeans`: 없으면 20년.
    pub fn from_json(raw: &Value) -> Self {
        let field = |key: &str| raw.get(key);

        let tarif_raw = if is_truthy(field("tarin")) {
            field("tarin")
        } else {
            field("tarif")
        };
        let hausselec = as_num(field("hausselec"), 0.0);
        let inflation_fallback = if hausselec != 0.0 {
            hausselec
        } else {
            DEFAULT_PRICE_INFLATION
        };

        Self {
            facture: as_num(field("facture"), 0.0),
            tarif: as_num(tarif_raw, 0.0),
            ratiojour: as_num(field("ratiojour"), 0.0),
            productible: as_num(field("productible"), 0.0),
            puissance: as_num(field("puissance"), 0.0),
            tarifrevente: as_num(field("tarifrevente"), 0.0),
            hausselecgraph: as_num(field("hausselecgraph"), inflation_fallback),
            periodeans: as_num(field("periodeans"), DEFAULT_HORIZON_YEARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(SolarInput::from_json(&json!({})), SolarInput::default());
        assert_eq!(SolarInput::from_json(&json!([1, 2])), SolarInput::default());
    }

    #[test]
    fn legacy_tariff_alias_wins_when_set() {
        let input = SolarInput::from_json(&json!({ "tarin": "0,25", "tarif": 0.2 }));
        assert_eq!(input.tarif, 0.25);
        let input = SolarInput::from_json(&json!({ "tarin": 0, "tarif": 0.2 }));
        assert_eq!(input.tarif, 0.2);
    }

    #[test]
    fn inflation_falls_back_to_legacy_field() {
        let input = SolarInput::from_json(&json!({ "hausselec": 0.03 }));
        assert_eq!(input.hausselecgraph, 0.03);
        let input = SolarInput::from_json(&json!({ "hausselec": 0 }));
        assert_eq!(input.hausselecgraph, DEFAULT_PRICE_INFLATION);
        let input = SolarInput::from_json(&json!({ "hausselec": 0.03, "hausselecgraph": 0 }));
        assert_eq!(input.hausselecgraph, 0.0);
    }
}
