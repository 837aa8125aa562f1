//! Process-wide tracing setup for the viewer binaries.
//!
//! Events go to a daily rolling file under `~/.asset-viewer/logs` and, for
//! interactive runs, to stderr as well. `RUST_LOG` overrides the default
//! `info` level.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "info";

/// Directory holding the rolling log files.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".asset-viewer")
        .join("logs")
}

/// File name prefix for one component, e.g. `asset-viewer-cli`.
pub fn log_file_prefix(component: &str) -> String {
    format!("asset-viewer-{}", component)
}

/// Install the global subscriber for `component`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background file writer. A second call leaves the
/// first subscriber in place.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Cannot create log directory {}: {}", dir.display(), e);
    }

    let appender = tracing_appender::rolling::daily(&dir, log_file_prefix(component));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let file = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    let console = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file)
        .with(console)
        .try_init();

    guard
}
