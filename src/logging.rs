//! Logging configuration.
//!
//! Logs go to stderr by default so stdout stays reserved for the JSON result,
//! or to a file when one is configured.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initializes logging to stderr.
///
/// Returns false when a global subscriber was already installed.
pub fn init_stderr_logging(level: &str) -> bool {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .try_init();
    installed(result)
}

/// Initializes logging to a file, appending across runs.
///
/// Falls back to stderr logging if the file cannot be opened. Returns false
/// when a global subscriber was already installed.
pub fn init_file_logging(path: &Path, level: &str) -> bool {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return init_stderr_logging(level);
        }
    }

    let log_file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {e}");
            return init_stderr_logging(level);
        }
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false) // No ANSI colors in file output
        .try_init();
    installed(result)
}

fn installed<E: std::fmt::Display>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!("Keeping existing log subscriber: {e}");
            false
        }
    }
}
