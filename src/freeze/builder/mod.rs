//! Build orchestration.
//!
//! This module provides the [`Orchestrator`] that turns the watcher sources
//! into a single-file executable.
//!
//! # Overview
//!
//! A run:
//! 1. Makes sure PyInstaller is importable, installing it with pip if not
//! 2. Removes the previous `dist/`, `build/` and `*.spec` leftovers
//! 3. Invokes PyInstaller once with the fixed flag set
//! 4. Reports the artifact size and checksum
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for the artifact
//! - [`orchestrator`] - Main [`Orchestrator`] and [`BuildOutcome`]
//! - [`packaging`] - PyInstaller argument construction and invocation
//! - [`phase`] - [`BuildPhase`] state machine
//! - [`tool_detection`] - Interpreter lookup and PyInstaller availability

mod checksum;
mod orchestrator;
pub mod packaging;
mod phase;
pub mod tool_detection;

pub use checksum::calculate_sha256;
pub use orchestrator::{BuildOutcome, Orchestrator};
pub use phase::{BuildPhase, PhaseTracker};
