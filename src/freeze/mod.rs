//! Freezing the STAT file watcher into a single executable.
//!
//! - [`settings`] - fixed build configuration and its builder
//! - [`builder`] - dependency check, cleanup, packaging, reporting
//! - [`report`] - the artifact and its size arithmetic
//! - [`utils`] - filesystem and process helpers

pub mod builder;
pub mod error;
pub mod report;
pub mod settings;
pub mod utils;

pub use builder::{BuildOutcome, BuildPhase, Orchestrator};
pub use error::{Error, Result};
pub use report::Artifact;
pub use settings::{BuildSettings, BuildSettingsBuilder};
