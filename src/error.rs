//! Error types for the file-backed layers (catalog export, settings file).
//!
//! The work list and scroll spy controllers never fail; everything here comes
//! from reading and parsing files on disk.

use std::path::PathBuf;

/// Errors raised while loading the catalog export or the settings file.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed catalog document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("catalog loader stopped before delivering a result")]
    LoaderDisconnected,
}

pub type Result<T> = std::result::Result<T, FolioError>;
