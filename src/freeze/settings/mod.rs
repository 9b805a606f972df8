//! Configuration structures for freeze operations.
//!
//! The build configuration is static: [`defaults`] holds the watcher layout,
//! and [`BuildSettingsBuilder`] assembles it into [`BuildSettings`] together
//! with the per-run project directory and interpreter.

mod builder;
mod core;
pub mod defaults;

pub use builder::BuildSettingsBuilder;
pub use core::BuildSettings;
