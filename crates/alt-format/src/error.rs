//! Error types for formatter configuration.
//!
//! Rendering itself never fails. These errors only surface while choosing
//! the process-wide [`RenderMode`](crate::RenderMode) or when stringifying
//! values through serde.

use thiserror::Error;

/// Errors raised while configuring or feeding the formatter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A render mode name that is neither `append` nor `substitute`.
    #[error("unknown render mode '{0}' (expected 'append' or 'substitute')")]
    UnknownMode(String),

    /// The process-wide render mode was already resolved.
    #[error("render mode already initialized as {0}")]
    AlreadyInitialized(crate::RenderMode),

    /// A value could not be projected to text.
    #[error("failed to stringify argument {index}: {source}")]
    Stringify {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Malformed configuration document.
    #[error("invalid formatter config: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Result type for formatter configuration.
pub type Result<T> = std::result::Result<T, FormatError>;
