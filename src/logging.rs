//! Log file setup
//!
//! Prompts own stdout, so tracing output goes to a file in the data directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LOG_ENV_VAR, data_dir, log_path};

const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter from an explicit level, then `STDHUB_LOG`, then `info`
fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        None => EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines on drop and must be held until exit.
/// Returns `None` when the data directory cannot be created; logging is then disabled.
pub fn init(level: Option<&str>) -> Option<WorkerGuard> {
    let dir = data_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Logging disabled: failed to create {}: {}", dir.display(), e);
        return None;
    }

    let path = log_path();
    let file_name = path.file_name()?.to_owned();
    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Some(guard)
}
