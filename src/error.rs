//! Top-level error types.
//!
//! Domain failures live in [`crate::freeze::Error`]; this layer adds CLI
//! failures and attaches operator-facing recovery hints.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, WatcherFreezeError>;

/// Main error type for all watcher_freeze operations
#[derive(Error, Debug)]
pub enum WatcherFreezeError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Freeze errors
    #[error("{0}")]
    Freeze(#[from] crate::freeze::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl WatcherFreezeError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Freeze(e) => e.recovery_suggestions(),
            Self::Cli(_) => vec!["Run with --help for usage".to_string()],
            Self::Io(_) => {
                vec!["Check the error message above for specific details".to_string()]
            }
        }
    }
}
