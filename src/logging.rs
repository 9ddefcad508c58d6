//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file. `FOLIO_LOG`
//! takes an `EnvFilter` directive, `FOLIO_LOG_FILE` overrides the path.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "FOLIO_LOG";
pub const LOG_FILE_ENV: &str = "FOLIO_LOG_FILE";

pub fn log_path() -> PathBuf {
    std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("folio.log"))
}

/// Installs the global subscriber. Returns the log file path, or `None` if
/// the file could not be opened (logging is then disabled).
pub fn init() -> Option<PathBuf> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("folio=info,warn"));

    let path = log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .ok()?;

    Some(path)
}
