use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use solar_savings_calculator::{
    app::{self, AppError, Status},
    config::{self, OutputFormat},
    i18n::keys,
    loader::InputSource,
    ui_cli,
};
use tracing_subscriber::EnvFilter;

/// 입력 문서를 읽지 못했을 때의 종료 코드.
const EXIT_LOAD_FAILED: u8 = 1;
/// 설정 또는 출력 오류의 종료 코드.
const EXIT_ERROR: u8 = 2;

/// 태양광 설치의 자가소비/판매 경제성을 계산해 표로 출력한다.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input document: JSON file path or http(s) URL
    #[arg(short, long)]
    input: Option<String>,
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    /// Language (auto, fr, en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// Configuration file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Currency symbol appended to amounts
    #[arg(long)]
    currency: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 한 번 계산하고 종료한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let code = run(args, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

/// 한 번 실행하고 종료 코드를 돌려준다. 결과는 `out`, 상태와 오류는 `err`로 쓴다.
fn run(args: Args, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match try_run(args, out, err) {
        Ok(true) => 0,
        Ok(false) => EXIT_LOAD_FAILED,
        Err(e) => {
            // stderr마저 막혔다면 더 보고할 곳이 없다
            let _ = writeln!(err, "error: {e}");
            EXIT_ERROR
        }
    }
}

/// 로드 실패는 상태 줄로 보고하고 `false`를 돌려준다.
fn try_run(args: Args, out: &mut impl Write, err: &mut impl Write) -> Result<bool, AppError> {
    let mut cfg = config::load_from(&args.config)?;
    if let Some(symbol) = args.currency {
        cfg.currency_symbol = symbol;
    }
    let tr = app::translator_for(&cfg, &args.lang);
    let source = InputSource::parse(args.input.as_deref().unwrap_or(&cfg.input));
    let format = args.format.unwrap_or(cfg.output_format);

    let result = app::run_once(&source, &cfg, &tr);
    let status = Status::from_result(&result, &source, &tr);
    match result {
        Ok(report) => {
            writeln!(out, "{}", ui_cli::render(&report, &status, format, &tr)?)?;
            writeln!(err, "{}", status.message())?;
            Ok(true)
        }
        Err(load_err) => {
            tracing::warn!(%source, error = %load_err, "input document could not be loaded");
            if format == OutputFormat::Html {
                writeln!(out, "{}", ui_cli::render_html_failure(&status, &tr))?;
            }
            writeln!(err, "{}", status.message())?;
            if let Some(detail) = status.detail() {
                writeln!(err, "{}: {detail}", tr.t(keys::ERROR_PREFIX))?;
            }
            Ok(false)
        }
    }
}
