//! PyInstaller invocation.
//!
//! Builds the fixed flag set from [`BuildSettings`] and runs the bundler once,
//! relaying its output line by line.

use crate::cli::RuntimeConfig;
use crate::freeze::error::{Error, Result};
use crate::freeze::settings::BuildSettings;
use crate::freeze::settings::defaults::PACKAGING_MODULE;
use crate::freeze::utils::process::{command_line, describe_exit, for_each_line, tail_lines};
use std::process::Stdio;
use tokio::io::BufReader;
use tokio::process::Command;

/// Separator between source and destination in `--add-data`.
#[cfg(windows)]
pub const DATA_SEPARATOR: &str = ";";

/// Separator between source and destination in `--add-data`.
#[cfg(not(windows))]
pub const DATA_SEPARATOR: &str = ":";

/// Number of stderr lines quoted in a packaging failure.
const STDERR_TAIL: usize = 20;

/// Builds the bundler arguments, starting with `-m PyInstaller`.
///
/// Paths are passed relative to the project directory, which is the working
/// directory of the child process.
pub fn pyinstaller_args(settings: &BuildSettings) -> Vec<String> {
    let mut args = vec![
        "-m".to_string(),
        PACKAGING_MODULE.to_string(),
        "--onefile".to_string(),
        "--windowed".to_string(),
        "--name".to_string(),
        settings.output_name().to_string(),
        "--icon".to_string(),
        settings.icon().display().to_string(),
    ];

    for module in settings.hidden_imports() {
        args.push("--hidden-import".to_string());
        args.push(module.clone());
    }

    for dir in settings.resource_dirs() {
        let dir = dir.display();
        args.push("--add-data".to_string());
        args.push(format!("{dir}{DATA_SEPARATOR}{dir}"));
    }

    args.push("--distpath".to_string());
    args.push(settings.dist_dir().display().to_string());
    args.push("--workpath".to_string());
    args.push(settings.work_dir().display().to_string());
    args.push(settings.entry_point().display().to_string());

    args
}

/// Runs the bundler once and verifies the artifact appeared.
///
/// # Errors
///
/// [`Error::PackagingFailed`] when the bundler cannot be started, exits
/// non-zero, or exits zero without leaving the artifact in place.
pub async fn run_pyinstaller(settings: &BuildSettings, runtime: &RuntimeConfig) -> Result<()> {
    let args = pyinstaller_args(settings);
    let command = command_line(settings.python(), &args);
    log::info!("Running {}", command);

    let mut child = Command::new(settings.python())
        .args(&args)
        .current_dir(settings.project_dir())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::PackagingFailed {
            reason: format!("could not start `{}`: {}", command, e),
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes before waiting so a chatty bundler cannot block on a full pipe
    let (_, stderr_lines) = tokio::join!(
        async {
            if let Some(stdout) = stdout {
                for_each_line(BufReader::new(stdout), |line| runtime.indent(&line)).await;
            }
        },
        async {
            let mut captured = Vec::new();
            if let Some(stderr) = stderr {
                for_each_line(BufReader::new(stderr), |line| {
                    runtime.verbose_println(&line);
                    captured.push(line);
                })
                .await;
            }
            captured
        }
    );

    let status = child.wait().await.map_err(|e| Error::PackagingFailed {
        reason: format!("lost track of `{}`: {}", command, e),
    })?;

    if !status.success() {
        let tail = tail_lines(&stderr_lines, STDERR_TAIL);
        return Err(Error::PackagingFailed {
            reason: format!(
                "{} {}{}{}",
                PACKAGING_MODULE,
                describe_exit(status),
                if tail.is_empty() { "" } else { "\n" },
                tail
            ),
        });
    }

    let artifact = settings.artifact_path();
    if !tokio::fs::try_exists(&artifact).await.unwrap_or(false) {
        return Err(Error::PackagingFailed {
            reason: format!(
                "{} reported success but {} does not exist",
                PACKAGING_MODULE,
                artifact.display()
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freeze::BuildSettingsBuilder;

    fn settings() -> BuildSettings {
        BuildSettingsBuilder::new()
            .project_dir("/p")
            .python("python")
            .build()
            .unwrap()
    }

    fn value_after<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
        args.windows(2)
            .filter(|w| w[0] == flag)
            .map(|w| w[1].as_str())
            .collect()
    }

    #[test]
    fn runs_module_in_single_file_windowed_mode() {
        let args = pyinstaller_args(&settings());
        assert_eq!(&args[..2], ["-m", "PyInstaller"]);
        assert!(args.contains(&"--onefile".to_string()));
        assert!(args.contains(&"--windowed".to_string()));
        assert_eq!(value_after(&args, "--name"), ["FileWatcher"]);
        assert_eq!(value_after(&args, "--icon"), ["icon.ico"]);
    }

    #[test]
    fn every_hidden_import_gets_its_own_flag() {
        let args = pyinstaller_args(&settings());
        let imports = value_after(&args, "--hidden-import");
        assert_eq!(imports.len(), settings().hidden_imports().len());
        assert!(imports.contains(&"ui.tray_app"));
        assert!(imports.contains(&"config.watch_rules"));
    }

    #[test]
    fn resource_dirs_map_onto_themselves() {
        let args = pyinstaller_args(&settings());
        let data = value_after(&args, "--add-data");
        assert_eq!(
            data,
            [
                format!("config{DATA_SEPARATOR}config"),
                format!("core{DATA_SEPARATOR}core"),
                format!("ui{DATA_SEPARATOR}ui"),
            ]
        );
    }

    #[test]
    fn output_paths_precede_entry_point() {
        let args = pyinstaller_args(&settings());
        assert_eq!(value_after(&args, "--distpath"), ["dist"]);
        assert_eq!(value_after(&args, "--workpath"), ["build"]);
        assert_eq!(args.last().map(String::as_str), Some("main.py"));
    }
}
