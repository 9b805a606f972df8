//! Build orchestrator for the STAT file watcher.
//!
//! This library freezes the watcher's Python sources into one windowed,
//! single-file executable with PyInstaller:
//! - checks for PyInstaller and installs it on demand
//! - clears output from earlier runs
//! - runs the bundler with the fixed hidden-import and data flags
//! - reports the artifact size and checksum
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod freeze;

// Re-export commonly used types
pub use error::{CliError, Result, WatcherFreezeError};
