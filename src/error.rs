use std::path::PathBuf;

use thiserror::Error;

/// Result alias for the fallible parts of manifest generation.
pub(crate) type Result<T> = std::result::Result<T, ManifestError>;

/// Errors that abort a run. Anything recoverable (missing folders, a bad
/// prior manifest) is logged and never reaches this type.
#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config file {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ManifestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
