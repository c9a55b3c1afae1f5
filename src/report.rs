//! 계산 결과를 라벨/값/단위 행으로 정리한다.

use serde::Serialize;

use crate::format::NumberFormat;
use crate::i18n::Translator;
use crate::solar::{FieldSpec, SolarInput, SolarOutput};

/// 표 한 행.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub key: &'static str,
    pub value: f64,
    pub formatted: String,
    pub unit: String,
    pub description: String,
}

/// 행을 만들 때 필요한 표시 옵션.
#[derive(Debug, Clone)]
pub struct ReportOptions<'a> {
    pub layout: &'a [FieldSpec],
    pub number_format: NumberFormat,
    pub currency_symbol: &'a str,
}

/// 한 번의 계산 결과 전체.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: SolarInput,
    pub output: SolarOutput,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(
        input: SolarInput,
        output: SolarOutput,
        options: &ReportOptions<'_>,
        tr: &Translator,
    ) -> Self {
        let rows = build_rows(&output, options, tr);
        Self { input, output, rows }
    }
}

/// 레이아웃 순서대로 행을 만든다.
pub fn build_rows(
    output: &SolarOutput,
    options: &ReportOptions<'_>,
    tr: &Translator,
) -> Vec<ReportRow> {
    options
        .layout
        .iter()
        .map(|spec| {
            let key = spec.field.key();
            let value = output.value(spec.field);
            ReportRow {
                key,
                value,
                formatted: options.number_format.format(value),
                unit: spec.unit.label(options.currency_symbol, tr),
                description: tr.field_description(key),
            }
        })
        .collect()
}
