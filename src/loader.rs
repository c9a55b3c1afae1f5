//! 입력 문서를 파일 또는 HTTP(S)에서 매번 새로 읽어온다.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;

use crate::solar::SolarInput;

/// 입력 문서 위치.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Url(String),
}

impl InputSource {
    /// `http://` 또는 `https://`로 시작하면 URL, 그 외는 파일 경로로 본다.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            InputSource::Url(trimmed.to_string())
        } else {
            InputSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Url(url) => f.write_str(url),
        }
    }
}

/// 입력 문서 로드 오류.
#[derive(Debug)]
pub enum LoadError {
    /// 파일을 읽을 수 없음
    Io(std::io::Error),
    /// 요청 자체가 실패함 (연결 불가 등)
    Http(reqwest::Error),
    /// 성공이 아닌 응답 코드
    Status { code: u16, reason: String },
    /// JSON으로 해석할 수 없음
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{e}"),
            LoadError::Http(e) => write!(f, "{e}"),
            LoadError::Status { code, reason } if reason.is_empty() => write!(f, "HTTP {code}"),
            LoadError::Status { code, reason } => write!(f, "HTTP {code} {reason}"),
            LoadError::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        LoadError::Io(value)
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(value: reqwest::Error) -> Self {
        LoadError::Http(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        LoadError::Json(value)
    }
}

/// 원시 JSON 문서를 읽는다. 캐시를 거치지 않는다.
///
/// f64 범위를 넘는 숫자 리터럴도 문서 오류가 아니다. 값은 그대로 남고 변환 단계에서 기본값이 된다.
pub fn load_document(source: &InputSource) -> Result<Value, LoadError> {
    tracing::info!(%source, "loading input document");
    let body = match source {
        InputSource::File(path) => fs::read_to_string(path)?,
        InputSource::Url(url) => fetch(url)?,
    };
    Ok(serde_json::from_str(&body)?)
}

/// 문서를 읽고 입력값으로 변환한다. 필드 형태가 틀려도 기본값으로 채워진다.
pub fn load_input(source: &InputSource) -> Result<SolarInput, LoadError> {
    let raw = load_document(source)?;
    Ok(SolarInput::from_json(&raw))
}

fn fetch(url: &str) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()?;
    let status = response.status();
    tracing::debug!(url, status = status.as_u16(), "input document response");
    if !status.is_success() {
        return Err(LoadError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }
    Ok(response.text()?)
}
