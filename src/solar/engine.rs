use serde::Serialize;

use super::fields::OutputField;
use super::inputs::SolarInput;

/// 배터리 시나리오의 월평균 절감액 나눗수. 분석 기간과 무관하게 20년 × 12개월로 고정이다.
pub const BATTERY_AVERAGE_MONTHS: f64 = 240.0;
/// 요금 전망에 사용하는 고정 기간 [년].
pub const BILL_PROJECTION_YEARS: f64 = 10.0;

/// 태양광 경제성 계산 결과. 필드 순서는 계산 의존 순서를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarOutput {
    /// 연간 전기요금
    pub facturean: f64,
    /// 연간 소비량 [kWh]
    pub consokwh: f64,
    /// 야간 소비 비율
    pub rationuit: f64,
    /// 주간 소비량 [kWh]
    pub consoankwhdiurne: f64,
    /// 야간 소비량 [kWh]
    pub consoankwhnocturne: f64,
    /// 연간 발전량 [kWh]
    pub prodan: f64,
    /// 자가소비 발전량 [kWh]
    pub prodconsomme: f64,
    /// 판매 발전량 [kWh]
    pub prodrevendue: f64,
    /// 자가소비 가치
    pub valprodconsomme: f64,
    /// 판매 수익
    pub valprodrevendue: f64,
    /// 연간 총 편익
    pub totalecoan: f64,
    /// 1년차 월 절감액
    pub ecomoisan1: f64,
    /// 기간 말 전력량 단가 전망
    pub tarifdans20ans: f64,
    /// 10년 후 연간 요금 전망
    pub facturedans10ans: f64,
    /// 기간 누적 요금 (태양광 없음)
    pub totalfacs20anssanspv: f64,
    /// 기간 누적 절감액
    pub economies20ans: f64,
    /// 기간 누적 판매 수익
    pub revente20ans: f64,
    /// 기간 누적 요금 (태양광 설치)
    pub totalfacs20ansavecpv: f64,
    /// 전량 자가소비 시 1년차 가치 (배터리)
    pub valprodan1avecbatt: f64,
    /// 배터리 시나리오 1년차 월 절감액
    pub ecomoisan1avecbatt: f64,
    /// 배터리 시나리오 기간 누적 절감액
    pub economies20ansavecbatt: f64,
    /// 기간 평균 월 절감액
    pub ecomoismoy20ans: f64,
    /// 배터리 시나리오 평균 월 절감액 (240개월 고정)
    pub ecomoismoy20ansavecbatt: f64,
}

impl SolarOutput {
    /// 필드 식별자로 값을 조회한다.
    pub fn value(&self, field: OutputField) -> f64 {
        use OutputField::*;
        match field {
            Facturean => self.facturean,
            Consokwh => self.consokwh,
            Rationuit => self.rationuit,
            Consoankwhdiurne => self.consoankwhdiurne,
            Consoankwhnocturne => self.consoankwhnocturne,
            Prodan => self.prodan,
            Prodconsomme => self.prodconsomme,
            Prodrevendue => self.prodrevendue,
            Valprodconsomme => self.valprodconsomme,
            Valprodrevendue => self.valprodrevendue,
            Totalecoan => self.totalecoan,
            Ecomoisan1 => self.ecomoisan1,
            Ecomoismoy20ans => self.ecomoismoy20ans,
            Tarifdans20ans => self.tarifdans20ans,
            Facturedans10ans => self.facturedans10ans,
            Totalfacs20anssanspv => self.totalfacs20anssanspv,
            Economies20ans => self.economies20ans,
            Revente20ans => self.revente20ans,
            Totalfacs20ansavecpv => self.totalfacs20ansavecpv,
            Ecomoisan1avecbatt => self.ecomoisan1avecbatt,
            Valprodan1avecbatt => self.valprodan1avecbatt,
            Economies20ansavecbatt => self.economies20ansavecbatt,
            Ecomoismoy20ansavecbatt => self.ecomoismoy20ansavecbatt,
        }
    }
}

/// 스프레드시트 INT와 같이 내림한다. 무한대나 NaN은 0으로 취급한다.
pub fn excel_int(x: f64) -> f64 {
    if x.is_finite() {
        x.floor()
    } else {
        0.0
    }
}

/// 0.5를 양의 무한대 방향으로 올리는 반올림으로 소수 `digits`자리까지 맞춘다.
pub fn round_half_up(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return scaled / scale;
    }
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded / scale
}

/// 1년차 금액을 매년 `inflation`만큼 오르는 `years`년 누적 금액으로 바꾸는 등비급수 계수.
///
/// 상승률이 0이면 분모가 0이 되므로 극한값인 `years`를 돌려준다.
pub fn geometric_sum_factor(inflation: f64, years: f64) -> f64 {
    let ratio = 1.0 + inflation;
    if ratio == 1.0 {
        tracing::debug!(years, "zero price inflation, geometric factor equals horizon");
        return years;
    }
    (ratio.powf(years) - 1.0) / (ratio - 1.0)
}

/// 입력값으로 모든 결과 필드를 계산한다. 순수 함수이며 실패하지 않는다.
pub fn compute(input: SolarInput) -> SolarOutput {
    let SolarInput {
        facture,
        tarif,
        ratiojour,
        productible,
        puissance,
        tarifrevente,
        hausselecgraph,
        periodeans,
    } = input;

    let facturean = excel_int(facture * 12.0);
    let consokwh = if tarif != 0.0 {
        excel_int(facturean / tarif)
    } else {
        tracing::debug!("zero tariff, consumption volume set to 0");
        0.0
    };
    let rationuit = 1.0 - ratiojour;
    let consoankwhdiurne = excel_int(consokwh * ratiojour);
    let consoankwhnocturne = consokwh - consoankwhdiurne;

    let prodan = puissance * productible;
    let prodconsomme = if prodan > consoankwhdiurne {
        consoankwhdiurne
    } else {
        prodan
    };
    // 같을 때는 판매분이 없다. 대수적으로 줄인 식을 쓰지 않는다.
    let prodrevendue = if prodan > consoankwhdiurne {
        prodan - prodconsomme
    } else {
        0.0
    };

    let valprodconsomme = excel_int(prodconsomme * tarif);
    let valprodrevendue = excel_int(prodrevendue * tarifrevente);
    let totalecoan = valprodconsomme + valprodrevendue;
    let ecomoisan1 = excel_int(totalecoan / 12.0);

    let growth = 1.0 + hausselecgraph;
    let tarifdans20ans = round_half_up(tarif * growth.powf(periodeans), 3);
    let facturedans10ans = excel_int(facturean * growth.powf(BILL_PROJECTION_YEARS));

    let geo = geometric_sum_factor(hausselecgraph, periodeans);
    let totalfacs20anssanspv = excel_int(facturean * geo);
    let economies20ans = excel_int(valprodconsomme * geo + valprodrevendue * periodeans);
    let revente20ans = valprodrevendue * periodeans;
    let totalfacs20ansavecpv = totalfacs20anssanspv - economies20ans;

    let valprodan1avecbatt = excel_int(prodan * tarif);
    let ecomoisan1avecbatt = excel_int(valprodan1avecbatt / 12.0);
    let economies20ansavecbatt = excel_int(valprodan1avecbatt * geo);

    let ecomoismoy20ans = excel_int(economies20ans / periodeans / 12.0);
    let ecomoismoy20ansavecbatt = excel_int(economies20ansavecbatt / BATTERY_AVERAGE_MONTHS);

    SolarOutput {
        facturean,
        consokwh,
        rationuit,
        consoankwhdiurne,
        consoankwhnocturne,
        prodan,
        prodconsomme,
        prodrevendue,
        valprodconsomme,
        valprodrevendue,
        totalecoan,
        ecomoisan1,
        tarifdans20ans,
        facturedans10ans,
        totalfacs20anssanspv,
        economies20ans,
        revente20ans,
        totalfacs20ansavecpv,
        valprodan1avecbatt,
        ecomoisan1avecbatt,
        economies20ansavecbatt,
        ecomoismoy20ans,
        ecomoismoy20ansavecbatt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excel_int_floors_and_zeroes_non_finite() {
        assert_eq!(excel_int(2.9), 2.0);
        assert_eq!(excel_int(-0.5), -1.0);
        assert_eq!(excel_int(f64::INFINITY), 0.0);
        assert_eq!(excel_int(f64::NAN), 0.0);
    }

    #[test]
    fn round_half_up_matches_three_decimals() {
        assert_eq!(round_half_up(0.53066, 3), 0.531);
        assert_eq!(round_half_up(-1.0005, 3), -1.0);
        assert_eq!(round_half_up(2.0, 3), 2.0);
    }

    #[test]
    fn geometric_factor_without_inflation_is_horizon() {
        assert_eq!(geometric_sum_factor(0.0, 20.0), 20.0);
        assert_eq!(geometric_sum_factor(0.0, 7.0), 7.0);
    }

    #[test]
    fn geometric_factor_sums_yearly_growth() {
        // 1 + 1.1 + 1.21
        let geo = geometric_sum_factor(0.1, 3.0);
        assert!((geo - 3.31).abs() < 1e-12);
    }
}
