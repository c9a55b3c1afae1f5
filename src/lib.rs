//! 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진과 표 구성을 공유한다.

pub mod app;
pub mod coercion;
pub mod config;
pub mod format;
pub mod i18n;
pub mod loader;
pub mod report;
pub mod solar;
pub mod ui_cli;
pub mod units;
