use crate::config::Config;
use crate::format::NumberFormat;
use crate::i18n::{self, keys, Translator};
use crate::loader::{self, InputSource, LoadError};
use crate::report::{Report, ReportOptions};
use crate::solar;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 출력 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 입력 문서 로드 오류
    Load(LoadError),
    /// JSON 출력 직렬화 오류
    Render(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Load(e) => write!(f, "input error: {e}"),
            AppError::Render(e) => write!(f, "render error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<LoadError> for AppError {
    fn from(value: LoadError) -> Self {
        AppError::Load(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Render(value)
    }
}

/// 사용자에게 보여줄 상태 줄. 실패 시에만 상세 오류를 가진다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success { message: String },
    Failure { message: String, detail: String },
}

impl Status {
    /// 실행 결과로 상태를 만든다.
    pub fn from_result(
        result: &Result<Report, LoadError>,
        source: &InputSource,
        tr: &Translator,
    ) -> Self {
        match result {
            Ok(_) => Status::Success {
                message: tr.t(keys::STATUS_OK),
            },
            Err(err) => {
                let detail = i18n::fill_template(
                    &tr.t(keys::ERROR_LOAD_DETAIL),
                    &[("source", source.to_string()), ("message", err.to_string())],
                );
                Status::Failure {
                    message: tr.t(keys::STATUS_FAILED),
                    detail: format!("{detail}\n{}", tr.t(keys::ERROR_LOAD_HINT)),
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Success { message } | Status::Failure { message, .. } => message,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Status::Success { .. } => None,
            Status::Failure { detail, .. } => Some(detail),
        }
    }
}

/// 설정과 언어 옵션으로 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let lang_code = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref())
}

/// 설정에 맞는 표시 옵션.
pub fn report_options<'a>(config: &'a Config, tr: &Translator) -> ReportOptions<'a> {
    ReportOptions {
        layout: &solar::DEFAULT_LAYOUT,
        number_format: NumberFormat::new(tr.language().number_locale(), config.max_fraction_digits),
        currency_symbol: &config.currency_symbol,
    }
}

/// 로드, 계산, 행 구성을 한 번 수행한다. 로드가 실패하면 계산하지 않는다.
pub fn run_once(
    source: &InputSource,
    config: &Config,
    tr: &Translator,
) -> Result<Report, LoadError> {
    let input = loader::load_input(source)?;
    let output = solar::compute(input);
    Ok(Report::new(input, output, &report_options(config, tr), tr))
}
