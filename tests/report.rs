//! 결과 표 구성과 출력 형식 테스트.
use solar_savings_calculator::app::{self, Status};
use solar_savings_calculator::config::{Config, OutputFormat};
use solar_savings_calculator::format::{NumberFormat, NumberLocale};
use solar_savings_calculator::i18n::Translator;
use solar_savings_calculator::loader::{InputSource, LoadError};
use solar_savings_calculator::report::{Report, ReportOptions};
use solar_savings_calculator::solar::{compute, SolarInput, DEFAULT_LAYOUT};
use solar_savings_calculator::ui_cli;

const FIELD_ORDER: [&str; 23] = [
    "facturean",
    "consokwh",
    "rationuit",
    "consoankwhdiurne",
    "consoankwhnocturne",
    "prodan",
    "prodconsomme",
    "prodrevendue",
    "valprodconsomme",
    "valprodrevendue",
    "totalecoan",
    "ecomoisan1",
    "ecomoismoy20ans",
    "tarifdans20ans",
    "facturedans10ans",
    "totalfacs20anssanspv",
    "economies20ans",
    "revente20ans",
    "totalfacs20ansavecpv",
    "ecomoisan1avecbatt",
    "valprodan1avecbatt",
    "economies20ansavecbatt",
    "ecomoismoy20ansavecbatt",
];

fn reference_input() -> SolarInput {
    SolarInput {
        facture: 100.0,
        tarif: 0.2,
        ratiojour: 0.6,
        productible: 1100.0,
        puissance: 3.0,
        tarifrevente: 0.1,
        hausselecgraph: 0.05,
        periodeans: 20.0,
    }
}

fn report(lang: &str) -> Report {
    let tr = Translator::new(lang);
    let options = ReportOptions {
        layout: &DEFAULT_LAYOUT,
        number_format: NumberFormat::new(tr.language().number_locale(), 2),
        currency_symbol: "€",
    };
    let input = reference_input();
    Report::new(input, compute(input), &options, &tr)
}

fn row<'a>(report: &'a Report, key: &str) -> &'a solar_savings_calculator::report::ReportRow {
    report.rows.iter().find(|r| r.key == key).expect(key)
}

#[test]
fn rows_follow_fixed_order() {
    let keys: Vec<&str> = report("fr").rows.iter().map(|r| r.key).collect();
    assert_eq!(keys, FIELD_ORDER);
}

#[test]
fn french_rows_carry_units_and_formatting() {
    let report = report("fr");
    let facture = row(&report, "facturean");
    assert_eq!(facture.formatted, "1\u{202F}200");
    assert_eq!(facture.unit, "€");
    assert_eq!(row(&report, "consokwh").unit, "kWh");
    assert_eq!(row(&report, "rationuit").formatted, "0,4");
    assert_eq!(row(&report, "rationuit").unit, "");
    assert_eq!(row(&report, "ecomoisan1").unit, "€/mois");
    assert_eq!(row(&report, "tarifdans20ans").formatted, "0,53");
    assert_eq!(row(&report, "tarifdans20ans").unit, "€/kWh");
    assert_eq!(row(&report, "facturean").description, "Facture annuelle");
}

#[test]
fn english_rows_use_english_conventions() {
    let report = report("en");
    assert_eq!(row(&report, "totalfacs20anssanspv").formatted, "39,679");
    assert_eq!(row(&report, "ecomoismoy20ans").unit, "€/month");
}

#[test]
fn currency_symbol_comes_from_options() {
    let tr = Translator::new("en");
    let options = ReportOptions {
        layout: &DEFAULT_LAYOUT,
        number_format: NumberFormat::new(NumberLocale::En, 2),
        currency_symbol: "$",
    };
    let input = reference_input();
    let report = Report::new(input, compute(input), &options, &tr);
    assert_eq!(row(&report, "economies20ans").unit, "$");
    assert_eq!(row(&report, "ecomoisan1avecbatt").unit, "$/month");
}

#[test]
fn failure_status_names_source_and_cause() {
    let tr = Translator::new("fr");
    let source = InputSource::parse("absent.json");
    let result: Result<Report, LoadError> = Err(LoadError::Status {
        code: 404,
        reason: "Not Found".into(),
    });
    let status = Status::from_result(&result, &source, &tr);
    assert!(!status.is_ok());
    assert_eq!(status.message(), "Échec du chargement.");
    let detail = status.detail().unwrap();
    assert!(detail.contains("absent.json"), "{detail}");
    assert!(detail.contains("HTTP 404 Not Found"), "{detail}");
}

#[test]
fn success_status_has_no_detail() {
    let tr = Translator::new("en");
    let source = InputSource::parse("donnees.json");
    let status = Status::from_result(&Ok(report("en")), &source, &tr);
    assert!(status.is_ok());
    assert_eq!(status.detail(), None);
}

#[test]
fn json_output_exposes_rows_and_raw_values() {
    let report = report("fr");
    let status = Status::Success {
        message: "ok".into(),
    };
    let text = ui_cli::render_json(&report, &status).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["output"]["consokwh"], 6000.0);
    assert_eq!(value["input"]["periodeans"], 20.0);
    assert_eq!(value["rows"].as_array().unwrap().len(), 23);
    assert_eq!(value["rows"][0]["key"], "facturean");
    assert_eq!(value["status"], "ok");
}

#[test]
fn html_output_escapes_and_lists_every_row() {
    let tr = Translator::new("fr");
    let report = report("fr");
    let status = Status::Success {
        message: "<ok>".into(),
    };
    let html = ui_cli::render_html(&report, &status, &tr);
    assert!(html.contains("&lt;ok&gt;"));
    assert_eq!(html.matches("<tr title=").count(), 23);
    assert!(html.contains("<td class=\"value\">1\u{202F}200</td>"));
    assert!(html.contains("Valeur de l&#x27;autoconsommation") || html.contains("Valeur de l'autoconsommation"));
}

#[test]
fn table_output_contains_headers_and_values() {
    let tr = Translator::new("en");
    let report = report("en");
    let status = Status::Success {
        message: "done".into(),
    };
    let text = ui_cli::render(&report, &status, OutputFormat::Table, &tr).unwrap();
    assert!(text.contains("Field"));
    assert!(text.contains("facturean"));
    assert!(text.contains("1,200"));
}

#[test]
fn pipeline_runs_from_file_to_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("donnees.json");
    std::fs::write(&path, r#"{"facture": 100, "tarif": 0.2, "ratiojour": 0.6}"#).unwrap();
    let cfg = Config {
        language: "en".into(),
        ..Config::default()
    };
    let tr = app::translator_for(&cfg, "auto");
    let report = app::run_once(&InputSource::File(path), &cfg, &tr).unwrap();
    assert_eq!(report.rows.len(), 23);
    assert_eq!(report.output.consokwh, 6000.0);
    assert_eq!(report.rows[1].formatted, "6,000");
}
