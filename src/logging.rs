//! Diagnostic logging.
//!
//! The UI owns stdout, so `tracing` output only goes to a file. Without a
//! file no subscriber is installed and every event is discarded.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to open log file '{path}': {source}")]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global subscriber writing to `file`.
///
/// `RUST_LOG` wins over `level` when set. Returns `Ok(false)` when `file`
/// is `None` and logging stays disabled.
pub fn init_tracing(level: &str, file: Option<&Path>) -> Result<bool, LoggingError> {
    let Some(path) = file else {
        return Ok(false);
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidFilter {
            filter: level.to_string(),
            source,
        })?,
    };

    let path = expand_tilde(path);
    let writer = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(writer))
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(true)
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_error = |source| LoggingError::OpenError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)
}

pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
