//! 결과를 터미널 표, JSON, HTML 페이지로 그린다.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::app::{AppError, Status};
use crate::config::OutputFormat;
use crate::i18n::{keys, Translator};
use crate::report::{Report, ReportRow};
use crate::solar::{SolarInput, SolarOutput};

/// 형식에 맞게 결과를 문자열로 만든다.
pub fn render(
    report: &Report,
    status: &Status,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(render_table(report, tr)),
        OutputFormat::Json => Ok(render_json(report, status)?),
        OutputFormat::Html => Ok(render_html(report, status, tr)),
    }
}

/// 터미널용 3열 표.
pub fn render_table(report: &Report, tr: &Translator) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            tr.t(keys::COLUMN_FIELD),
            tr.t(keys::COLUMN_VALUE),
            tr.t(keys::COLUMN_UNIT),
        ]);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(row.key),
            Cell::new(&row.formatted).set_alignment(CellAlignment::Right),
            Cell::new(&row.unit),
        ]);
    }
    table.to_string()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: &'a str,
    input: &'a SolarInput,
    output: &'a SolarOutput,
    rows: &'a [ReportRow],
}

/// 행 목록, 원시 입력/결과, 상태를 담은 JSON.
pub fn render_json(report: &Report, status: &Status) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        status: status.message(),
        input: &report.input,
        output: &report.output,
        rows: &report.rows,
    })
}

/// 브라우저에서 바로 열 수 있는 단독 HTML 페이지.
pub fn render_html(report: &Report, status: &Status, tr: &Translator) -> String {
    let title = tr.t(keys::APP_TITLE);
    let status_class = if status.is_ok() { "ok" } else { "err" };
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n",
        tr.language_code(),
        encode_text(&title)
    ));
    out.push_str(concat!(
        "<style>\n",
        "body{font-family:system-ui,sans-serif;margin:2rem}\n",
        "table{border-collapse:collapse}\n",
        "td,th{border:1px solid #ccc;padding:.3rem .6rem}\n",
        "td.value{text-align:right;font-variant-numeric:tabular-nums}\n",
        ".ok{color:#1a7f37}.err{color:#b42318}\n",
        "</style>\n</head>\n<body>\n"
    ));
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(&title)));
    out.push_str(&format!(
        "<p id=\"status\" class=\"{status_class}\">{}</p>\n",
        encode_text(status.message())
    ));
    if let Some(detail) = status.detail() {
        out.push_str(&format!("<pre id=\"error\">{}</pre>\n", encode_text(detail)));
    }
    out.push_str(&format!(
        "<table id=\"results\">\n<thead><tr><th>{}</th><th>{}</th><th>{}</th></tr></thead>\n<tbody>\n",
        encode_text(&tr.t(keys::COLUMN_FIELD)),
        encode_text(&tr.t(keys::COLUMN_VALUE)),
        encode_text(&tr.t(keys::COLUMN_UNIT)),
    ));
    for row in &report.rows {
        out.push_str(&format!(
            "<tr title=\"{}\"><td>{}</td><td class=\"value\">{}</td><td>{}</td></tr>\n",
            encode_double_quoted_attribute(&row.description),
            encode_text(row.key),
            encode_text(&row.formatted),
            encode_text(&row.unit),
        ));
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

/// 실패 시 HTML 페이지. 표 없이 상태와 오류만 보여준다.
pub fn render_html_failure(status: &Status, tr: &Translator) -> String {
    let title = tr.t(keys::APP_TITLE);
    let mut out = format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
        tr.language_code(),
        encode_text(&title)
    );
    out.push_str(&format!(
        "<p id=\"status\" class=\"err\">{}</p>\n",
        encode_text(status.message())
    ));
    if let Some(detail) = status.detail() {
        out.push_str(&format!("<pre id=\"error\">{}</pre>\n", encode_text(detail)));
    }
    out.push_str("</body>\n</html>\n");
    out
}
