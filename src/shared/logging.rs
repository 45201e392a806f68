//! Logging setup
//!
//! Everything logs through `tracing`. The subscriber writes to a file in
//! the data directory so log lines never interleave with the terminal UI;
//! when that file cannot be opened it falls back to stderr, where only
//! warnings and errors are shown unless RUST_LOG asks for more.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used on stderr when RUST_LOG is not set
pub const STDERR_LEVEL: &str = "warn";

/// Build the filter: RUST_LOG wins, then the configured level, then `info`
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log file path when logging
/// to a file. Calling this twice keeps the first subscriber.
pub fn init(level: &str, log_path: Option<&Path>) -> Option<PathBuf> {
    let mut open_error = None;

    if let Some(path) = log_path {
        match open_log(path) {
            Ok(file) => {
                let installed = tracing_subscriber::registry()
                    .with(filter_for(level))
                    .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                    .try_init()
                    .is_ok();
                return installed.then(|| path.to_path_buf());
            }
            Err(e) => open_error = Some((path, e)),
        }
    }

    let _ = tracing_subscriber::registry()
        .with(filter_for(STDERR_LEVEL))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Some((path, e)) = open_error {
        warn!(path = %path.display(), error = %e, "cannot open log file, logging to stderr");
    }
    None
}
