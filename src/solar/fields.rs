use serde::Serialize;

use crate::units::DisplayUnit;

/// 결과 레코드의 필드 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputField {
    Facturean,
    Consokwh,
    Rationuit,
    Consoankwhdiurne,
    Consoankwhnocturne,
    Prodan,
    Prodconsomme,
    Prodrevendue,
    Valprodconsomme,
    Valprodrevendue,
    Totalecoan,
    Ecomoisan1,
    Ecomoismoy20ans,
    Tarifdans20ans,
    Facturedans10ans,
    Totalfacs20anssanspv,
    Economies20ans,
    Revente20ans,
    Totalfacs20ansavecpv,
    Ecomoisan1avecbatt,
    Valprodan1avecbatt,
    Economies20ansavecbatt,
    Ecomoismoy20ansavecbatt,
}

impl OutputField {
    /// 입력/출력 문서에서 쓰는 키.
    pub fn key(self) -> &'static str {
        use OutputField::*;
        match self {
            Facturean => "facturean",
            Consokwh => "consokwh",
            Rationuit => "rationuit",
            Consoankwhdiurne => "consoankwhdiurne",
            Consoankwhnocturne => "consoankwhnocturne",
            Prodan => "prodan",
            Prodconsomme => "prodconsomme",
            Prodrevendue => "prodrevendue",
            Valprodconsomme => "valprodconsomme",
            Valprodrevendue => "valprodrevendue",
            Totalecoan => "totalecoan",
            Ecomoisan1 => "ecomoisan1",
            Ecomoismoy20ans => "ecomoismoy20ans",
            Tarifdans20ans => "tarifdans20ans",
            Facturedans10ans => "facturedans10ans",
            Totalfacs20anssanspv => "totalfacs20anssanspv",
            Economies20ans => "economies20ans",
            Revente20ans => "revente20ans",
            Totalfacs20ansavecpv => "totalfacs20ansavecpv",
            Ecomoisan1avecbatt => "ecomoisan1avecbatt",
            Valprodan1avecbatt => "valprodan1avecbatt",
            Economies20ansavecbatt => "economies20ansavecbatt",
            Ecomoismoy20ansavecbatt => "ecomoismoy20ansavecbatt",
        }
    }
}

/// 표 한 행의 정의: 어떤 필드를 어떤 단위로 보여줄지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: OutputField,
    pub unit: DisplayUnit,
}

const fn spec(field: OutputField, unit: DisplayUnit) -> FieldSpec {
    FieldSpec { field, unit }
}

/// 결과 표의 기본 행 구성. 표시 순서 그대로 나열한다.
pub static DEFAULT_LAYOUT: [FieldSpec; 23] = {
    use DisplayUnit::*;
    use OutputField::*;
    [
        spec(Facturean, Currency),
        spec(Consokwh, Kwh),
        spec(Rationuit, Dimensionless),
        spec(Consoankwhdiurne, Kwh),
        spec(Consoankwhnocturne, Kwh),
        spec(Prodan, Kwh),
        spec(Prodconsomme, Kwh),
        spec(Prodrevendue, Kwh),
        spec(Valprodconsomme, Currency),
        spec(Valprodrevendue, Currency),
        spec(Totalecoan, Currency),
        spec(Ecomoisan1, CurrencyPerMonth),
        spec(Ecomoismoy20ans, CurrencyPerMonth),
        spec(Tarifdans20ans, CurrencyPerKwh),
        spec(Facturedans10ans, Currency),
        spec(Totalfacs20anssanspv, Currency),
        spec(Economies20ans, Currency),
        spec(Revente20ans, Currency),
        spec(Totalfacs20ansavecpv, Currency),
        spec(Ecomoisan1avecbatt, CurrencyPerMonth),
        spec(Valprodan1avecbatt, Currency),
        spec(Economies20ansavecbatt, Currency),
        spec(Ecomoismoy20ansavecbatt, CurrencyPerMonth),
    ]
};
