use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{GeminiTutor, StudyHandle, StudyRuntime};
use syllabus_core::StudyConfig;
use syllabus_core::config::parse_positive;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeconds { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeconds { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a positive integer)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_seconds(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<u32, ArgsError> {
    let raw = require_value(args, flag)?;
    parse_positive(Some(raw.clone())).ok_or(ArgsError::InvalidSeconds { flag, raw })
}

struct DesktopApp {
    study: StudyHandle,
    initial_path: Option<String>,
}

impl UiApp for DesktopApp {
    fn study(&self) -> StudyHandle {
        self.study.clone()
    }

    fn initial_path(&self) -> Option<String> {
        self.initial_path.clone()
    }
}

#[derive(Debug)]
struct Args {
    file: Option<PathBuf>,
    config: StudyConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--file <path>] [--focus-secs <n>] [--break-secs <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --focus-secs 1800");
    eprintln!("  --break-secs 300");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SYLLABUS_AI_API_KEY (or GEMINI_API_KEY), SYLLABUS_AI_MODEL, SYLLABUS_AI_BASE_URL,");
    eprintln!("  SYLLABUS_AI_TIMEOUT_MS, SYLLABUS_FOCUS_SECS, SYLLABUS_BREAK_SECS, SYLLABUS_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut file = None;
        let mut config = StudyConfig::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => file = Some(PathBuf::from(require_value(args, "--file")?)),
                "--focus-secs" => {
                    config = config.with_focus_secs(require_seconds(args, "--focus-secs")?);
                }
                "--break-secs" => {
                    config = config.with_break_secs(require_seconds(args, "--break-secs")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { file, config })
    }
}

fn init_tracing() {
    let level = std::env::var("SYLLABUS_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(log_fmt::layer().with_target(true))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // `ui` is the only subcommand and the default.
    if argv.first().map(String::as_str) == Some("ui") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let tutor = GeminiTutor::from_env();
    if !tutor.enabled() {
        warn!("no API key found; topic extraction and lessons will fail until SYLLABUS_AI_API_KEY is set");
    }

    info!(
        focus_secs = parsed.config.focus_secs,
        break_secs = parsed.config.break_secs,
        "starting study runtime"
    );
    let (runtime, study) = StudyRuntime::new(parsed.config, Arc::new(tutor));
    runtime.spawn();

    let initial_path = parsed.file.as_ref().map(|path| path.display().to_string());
    if let Some(path) = parsed.file.as_ref() {
        study.upload_path(path).await?;
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        study,
        initial_path,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("SyllabusAI")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
