//! Error types for logger setup.

use thiserror::Error;

/// Errors that can occur while wiring up loggers.
#[derive(Debug, Error)]
pub enum LogError {
    /// The global logger was already built or installed.
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// Another logger already owns the `log` facade.
    #[error("failed to install log facade: {0}")]
    Install(#[from] log::SetLoggerError),
}

/// Result type for logger setup.
pub type Result<T> = std::result::Result<T, LogError>;
