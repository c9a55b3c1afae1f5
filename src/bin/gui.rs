#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use solar_savings_calculator::{
    app::{self, Status},
    config, i18n,
    loader::InputSource,
    report::Report,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/fr/en)
    let mut cli_lang = String::from("auto");
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = val.to_string();
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = args[i + 1].clone();
            i += 1;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "configuration unavailable, using defaults");
        config::Config::default()
    });
    let tr = app::translator_for(&app_cfg, &cli_lang);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(tr.t(i18n::keys::APP_TITLE))
        .with_inner_size([640.0, 760.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Solar Savings Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, tr))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    source_input: String,
    report: Option<Report>,
    status: Status,
}

impl GuiApp {
    fn new(config: config::Config, tr: i18n::Translator) -> Self {
        let mut s = Self {
            source_input: config.input.clone(),
            status: Status::Success {
                message: tr.t(i18n::keys::STATUS_LOADING),
            },
            config,
            tr,
            report: None,
        };
        s.reload();
        s
    }

    /// 현재 소스를 다시 읽어 계산한다. 실패하면 이전 표를 지운다.
    fn reload(&mut self) {
        let source = InputSource::parse(&self.source_input);
        let result = app::run_once(&source, &self.config, &self.tr);
        self.status = Status::from_result(&result, &source, &self.tr);
        self.report = result.ok();
    }

    fn open_file(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        self.source_input = path.display().to_string();
        self.config.input = self.source_input.clone();
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "could not remember input path");
        }
        self.reload();
    }

    fn ui_source_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.tr.t(i18n::keys::GUI_SOURCE));
            let edit = ui.text_edit_singleline(&mut self.source_input);
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(self.tr.t(i18n::keys::GUI_OPEN)).clicked() {
                self.open_file();
            }
            if ui.button(self.tr.t(i18n::keys::GUI_RELOAD)).clicked() || submitted {
                self.reload();
            }
        });
    }

    fn ui_status(&self, ui: &mut egui::Ui) {
        let color = if self.status.is_ok() {
            egui::Color32::from_rgb(26, 127, 55)
        } else {
            egui::Color32::from_rgb(180, 35, 24)
        };
        ui.colored_label(color, self.status.message());
    }

    fn ui_results(&self, ui: &mut egui::Ui) {
        if let Some(detail) = self.status.detail() {
            ui.label(
                egui::RichText::new(detail)
                    .monospace()
                    .color(egui::Color32::from_rgb(180, 35, 24)),
            );
        }
        let Some(report) = &self.report else {
            return;
        };
        egui::CollapsingHeader::new(self.tr.t(i18n::keys::GUI_INPUTS))
            .default_open(false)
            .show(ui, |ui| {
                let input = &report.input;
                egui::Grid::new("inputs_grid").num_columns(2).show(ui, |ui| {
                    for (key, value) in [
                        ("facture", input.facture),
                        ("tarif", input.tarif),
                        ("ratiojour", input.ratiojour),
                        ("productible", input.productible),
                        ("puissance", input.puissance),
                        ("tarifrevente", input.tarifrevente),
                        ("hausselecgraph", input.hausselecgraph),
                        ("periodeans", input.periodeans),
                    ] {
                        ui.label(key);
                        ui.label(value.to_string());
                        ui.end_row();
                    }
                });
            });
        ui.add_space(8.0);
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("results_grid")
                .num_columns(3)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong(self.tr.t(i18n::keys::COLUMN_FIELD));
                    ui.strong(self.tr.t(i18n::keys::COLUMN_VALUE));
                    ui.strong(self.tr.t(i18n::keys::COLUMN_UNIT));
                    ui.end_row();
                    for row in &report.rows {
                        ui.label(row.key).on_hover_text(row.description.as_str());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.monospace(row.formatted.as_str());
                        });
                        ui.label(row.unit.as_str());
                        ui.end_row();
                    }
                });
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.reload();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.heading(self.tr.t(i18n::keys::APP_TITLE));
            self.ui_source_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.ui_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_results(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn app_for(input: &str) -> GuiApp {
        let cfg = config::Config {
            language: "fr".into(),
            input: input.into(),
            ..config::Config::default()
        };
        let tr = app::translator_for(&cfg, "fr");
        GuiApp::new(cfg, tr)
    }

    #[test]
    fn loads_report_on_start() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"facture": 100, "tarif": 0.2, "ratiojour": 0.6}}"#).unwrap();
        let app = app_for(&file.path().display().to_string());
        assert!(app.status.is_ok());
        let report = app.report.as_ref().expect("report");
        assert_eq!(report.rows.len(), 23);
        assert_eq!(report.rows[0].key, "facturean");
        assert_eq!(report.rows[0].formatted, "1\u{202F}200");
    }

    #[test]
    fn missing_file_shows_error_and_no_table() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let app = app_for(&missing.display().to_string());
        assert!(!app.status.is_ok());
        assert!(app.report.is_none());
        let detail = app.status.detail().expect("detail");
        assert!(detail.contains("absent.json"), "{detail}");
    }

    #[test]
    fn reload_picks_up_edited_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"facture": 10}}"#).unwrap();
        let mut app = app_for(&file.path().display().to_string());
        assert_eq!(app.report.as_ref().unwrap().output.facturean, 120.0);

        fs::write(file.path(), r#"{"facture": 20}"#).unwrap();
        app.reload();
        assert_eq!(app.report.as_ref().unwrap().output.facturean, 240.0);
    }
}
