use breakdown_core::config::types::LoggingConfig;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Overrides the configured levels, e.g. `BREAKDOWN_LOG=breakdown_core=trace`.
pub const LOG_ENV_VAR: &str = "BREAKDOWN_LOG";

static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the global subscriber.
///
/// Rendered prompts own stdout, so diagnostics always go to stderr. A
/// `[logging] file` adds a plain-text layer with its own level.
pub fn init(cfg: &LoggingConfig) -> io::Result<()> {
    let stderr_level = level_or(&cfg.level, LevelFilter::INFO);
    let stderr = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter(stderr_level));
    let registry = tracing_subscriber::registry().with(stderr);

    let Some(path) = &cfg.file else {
        registry.init();
        return Ok(());
    };

    let file = File::create(path).map_err(|e| {
        io::Error::new(e.kind(), format!("cannot create log file {}: {e}", path.display()))
    })?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = FILE_GUARD.lock() {
        *slot = Some(guard);
    }

    let file_level =
        level_or(cfg.file_level.as_deref().unwrap_or(&cfg.level), LevelFilter::DEBUG);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter(file_level));
    registry.with(file_layer).init();
    Ok(())
}

fn filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

fn level_or(s: &str, fallback: LevelFilter) -> LevelFilter {
    parse_level(s).unwrap_or(fallback)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
