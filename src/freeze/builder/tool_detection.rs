//! Packaging tool detection and on-demand installation.
//!
//! The bundler is a Python package, so availability means "importable by the
//! configured interpreter" rather than "present on PATH".

use crate::freeze::error::{Error, Result};
use crate::freeze::settings::defaults::{PACKAGING_MODULE, PACKAGING_PACKAGE, PYTHON_CANDIDATES};
use crate::freeze::utils::process::{command_line, describe_exit, output_lines, tail_lines};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Picks the interpreter for this run.
///
/// An explicit choice wins. Paths with a directory part are made absolute
/// against the current directory, since the interpreter is later spawned
/// inside the project directory. Bare names are resolved through `PATH`;
/// when nothing resolves, the first candidate name is returned as-is so the
/// dependency check reports the failure with full context.
pub fn resolve_python(explicit: Option<&Path>) -> PathBuf {
    if let Some(python) = explicit {
        if python.components().count() > 1 {
            return match python.absolutize() {
                Ok(absolute) => absolute.into_owned(),
                Err(e) => {
                    log::warn!("Could not make {} absolute: {}", python.display(), e);
                    python.to_path_buf()
                }
            };
        }
        return which::which(python).unwrap_or_else(|_| python.to_path_buf());
    }

    for candidate in PYTHON_CANDIDATES {
        match which::which(candidate) {
            Ok(path) => {
                log::debug!("Found {} at: {}", candidate, path.display());
                return path;
            }
            Err(e) => log::debug!("{} not found in PATH: {}", candidate, e),
        }
    }

    PathBuf::from(PYTHON_CANDIDATES[0])
}

/// Checks whether the packaging module imports cleanly.
///
/// A spawn failure (missing interpreter) counts as "not available".
pub async fn packaging_tool_available(python: &Path, project_dir: &Path) -> bool {
    let import = format!("import {}", PACKAGING_MODULE);
    let status = Command::new(python)
        .args(["-c", import.as_str()])
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => {
            log::info!("✓ {} importable via {}", PACKAGING_MODULE, python.display());
            true
        }
        Ok(status) => {
            log::debug!(
                "{} import check failed: interpreter {}",
                PACKAGING_MODULE,
                describe_exit(status)
            );
            false
        }
        Err(e) => {
            log::warn!("Failed to execute {}: {}", python.display(), e);
            false
        }
    }
}

/// Installs the packaging tool with pip.
///
/// # Errors
///
/// [`Error::DependencyUnavailable`] if pip cannot be started or exits
/// unsuccessfully.
pub async fn install_packaging_tool(python: &Path, project_dir: &Path) -> Result<()> {
    let args = ["-m", "pip", "install", PACKAGING_PACKAGE];
    let command = command_line(python, args);
    log::info!("Running {}", command);

    let output = Command::new(python)
        .args(args)
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| Error::DependencyUnavailable {
            tool: PACKAGING_PACKAGE.to_string(),
            reason: format!("could not run `{}`: {}", command, e),
        })?;

    if !output.status.success() {
        let stderr = tail_lines(&output_lines(&output.stderr), 10);
        return Err(Error::DependencyUnavailable {
            tool: PACKAGING_PACKAGE.to_string(),
            reason: format!(
                "`{}` {}{}{}",
                command,
                describe_exit(output.status),
                if stderr.is_empty() { "" } else { "\n" },
                stderr
            ),
        });
    }

    for line in output_lines(&output.stdout) {
        log::debug!("pip: {}", line);
    }

    Ok(())
}
