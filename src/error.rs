//! Error taxonomy for indexing and filtering operations.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    /// A required root directory or index file does not exist.
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An unrecognized argument value or a term set that cannot be compiled.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A filesystem operation failed on a specific path.
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted matcher no longer agrees with its own fingerprint.
    #[error("Stale matcher at {}: fingerprint mismatch", .0.display())]
    StaleMatcher(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiftError {
    /// Wrap an I/O error with the path it happened on.
    pub fn filesystem(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SiftError>;
