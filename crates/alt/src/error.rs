//! Error types for the file and binary helpers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the filesystem helpers.
#[derive(Debug, Error)]
pub enum UtilError {
    /// Opening, reading or writing `path` failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Refused to write an empty buffer.
    #[error("nothing to write to {}", .0.display())]
    EmptyWrite(PathBuf),
}

impl UtilError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for the filesystem helpers.
pub type Result<T> = std::result::Result<T, UtilError>;
