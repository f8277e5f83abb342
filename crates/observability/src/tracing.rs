//! Tracing/logging initialization.
//!
//! The terminal UI owns stdout/stderr, so logs are written as JSON lines to a
//! file. If no file can be opened, logging is disabled instead of corrupting
//! the screen.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where process logs ended up.
#[derive(Debug)]
pub enum LogTarget {
    File(PathBuf),
    /// The log file could not be opened; carries the reason.
    Disabled(String),
}

/// Initialize tracing/logging for the process.
///
/// Filter directives come from `RUST_LOG` (default `info`). Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init(log_file: &Path) -> LogTarget {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match open_log_file(log_file) {
        Ok(file) => file,
        Err(err) => {
            return LogTarget::Disabled(format!(
                "cannot open log file {}: {err}",
                log_file.display()
            ));
        }
    };

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    ::tracing::info!(path = %log_file.display(), "logging initialized");
    LogTarget::File(log_file.to_path_buf())
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
