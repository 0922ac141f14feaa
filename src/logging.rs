use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "session.log";

pub struct FileLogGuard {
    _guard: WorkerGuard,
}

fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

pub fn file_logging_enabled() -> bool {
    flag_enabled(std::env::var("ENABLE_FILE_LOGS").ok().as_deref())
}

/// Directory for the rolling session log, created on demand. `None` when file
/// logging is off or the directory cannot be created.
fn prepare_log_dir(enabled: bool, dir: Option<String>) -> Option<PathBuf> {
    if !enabled {
        return None;
    }
    let dir = PathBuf::from(dir.unwrap_or_else(|| "./logs".to_string()));
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(err) => {
            eprintln!("failed to create log directory {}: {err}", dir.display());
            None
        }
    }
}

/// Installs the global subscriber. Console output goes to stderr so it does
/// not interleave with the session transcript on stdout.
pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let log_dir = prepare_log_dir(file_logging_enabled(), std::env::var("LOG_DIR").ok());
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(FileLogGuard { _guard: guard }))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
