//! Helpers shared by the freeze pipeline.

pub mod fs;
pub mod process;
