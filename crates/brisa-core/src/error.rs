use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or persisting settings/secrets files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed document {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
