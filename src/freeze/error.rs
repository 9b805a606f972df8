//! Error types for freeze operations.
//!
//! The two domain failures are [`Error::DependencyUnavailable`] and
//! [`Error::PackagingFailed`]. The remaining variants carry plumbing failures
//! (filesystem, directory scans) with enough context to act on.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias for freeze operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while freezing the watcher application.
#[derive(Error, Debug)]
pub enum Error {
    /// The packaging tool is missing and could not be installed.
    #[error("{tool} is not available: {reason}")]
    DependencyUnavailable {
        /// Tool that was probed or installed
        tool: String,
        /// Why the tool is unusable
        reason: String,
    },

    /// The packaging tool ran but did not produce the artifact.
    #[error("packaging failed: {reason}")]
    PackagingFailed {
        /// Exit status, stderr tail or missing-artifact description
        reason: String,
    },

    /// A filesystem operation failed on a known path.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being attempted
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: std::io::Error,
    },

    /// Glob pattern error while scanning for stale descriptors.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Operator-facing hints for getting past this failure on the next run.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::DependencyUnavailable { .. } => vec![
                "Install it manually: python -m pip install pyinstaller".to_string(),
                "Or point --python at an interpreter that has it".to_string(),
            ],
            Self::PackagingFailed { .. } => vec![
                "Re-run with --verbose to see PyInstaller's full output".to_string(),
                "Check that main.py, icon.ico, config/, core/ and ui/ exist".to_string(),
            ],
            Self::Fs { .. } => vec![
                "Close programs holding files in dist/ or build/ and retry".to_string(),
            ],
            Self::Pattern(_) | Self::GenericError(_) => {
                vec!["Check the error message above for specific details".to_string()]
            }
        }
    }
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Convert an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Convert `Option` into a [`Result`] with a generic message.
pub trait Context<T> {
    /// Fail with [`Error::GenericError`] when `None`.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::freeze::Error::GenericError(format!($($arg)*)))
    };
}
