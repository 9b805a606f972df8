//! Command line interface for watcher_freeze.
//!
//! This module wires argument parsing, settings construction and the
//! orchestrator together, and owns the exit-code and pause contract.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};
use crate::freeze::builder::tool_detection::resolve_python;
use crate::freeze::{BuildSettingsBuilder, Orchestrator};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let runtime = RuntimeConfig::from(&args);

    let code = match execute(&args, &runtime).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            runtime.error(&e.to_string());
            for suggestion in e.recovery_suggestions() {
                runtime.indent(&suggestion);
            }
            1
        }
    };

    runtime.wait_for_acknowledgment();
    Ok(code)
}

/// Runs one build for parsed arguments and returns the process exit code.
pub async fn execute(args: &Args, runtime: &RuntimeConfig) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let python = resolve_python(args.python.as_deref());
    log::info!(
        "Freezing {} with {}",
        args.project_dir.display(),
        python.display()
    );

    let settings = BuildSettingsBuilder::new()
        .project_dir(&args.project_dir)
        .python(python)
        .build()?;

    runtime.progress(&format!(
        "Building {} from {}",
        settings.artifact_path().display(),
        settings.entry_point().display()
    ));

    let outcome = Orchestrator::new(settings).run(runtime).await;
    if let Err(e) = &outcome.result {
        for suggestion in e.recovery_suggestions() {
            runtime.indent(&suggestion);
        }
    }

    Ok(if outcome.succeeded() { 0 } else { 1 })
}
