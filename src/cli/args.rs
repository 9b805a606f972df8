//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation and
//! the per-run [`RuntimeConfig`] derived from it.

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Freeze the STAT file watcher into a single-file executable
#[derive(Parser, Debug)]
#[command(
    name = "watcher_freeze",
    version,
    about = "Freeze the STAT file watcher into a single-file executable",
    long_about = "Packages main.py and the config/, core/ and ui/ packages into one windowed
executable with PyInstaller.

Steps:
  1. Ensure PyInstaller is importable (installs it with pip when missing)
  2. Remove dist/, build/ and *.spec left by earlier runs
  3. Run PyInstaller with the fixed hidden-import and data flags
  4. Report the size of dist/FileWatcher

Exit code 0 = artifact guaranteed to exist at dist/FileWatcher (.exe on Windows)."
)]
pub struct Args {
    /// Directory containing main.py, icon.ico and the application packages
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Python interpreter used to run pip and PyInstaller
    ///
    /// Defaults to the first of `python`, `python3` found on PATH.
    #[arg(long, value_name = "PATH", env = "WATCHER_FREEZE_PYTHON")]
    pub python: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Relay PyInstaller's diagnostic output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }

        if self
            .python
            .as_ref()
            .is_some_and(|python| python.as_os_str().is_empty())
        {
            return Err("Python interpreter cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,

    /// Wait for Enter before exiting
    pause: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
            pause: !args.no_pause,
        }
    }
}

impl RuntimeConfig {
    /// Non-interactive configuration for library callers and tests.
    pub fn headless() -> Self {
        Self {
            output: super::OutputManager::new(false, true),
            pause: false,
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) {
        self.output.verbose(message)
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) {
        self.output.warn(message)
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        self.output.error(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        self.output.indent(message)
    }

    /// Whether the run ends with an acknowledgment prompt.
    pub fn pauses(&self) -> bool {
        self.pause
    }

    /// Blocks until the operator presses Enter (or stdin closes).
    pub fn wait_for_acknowledgment(&self) {
        if !self.pause {
            return;
        }

        print!("\nPress Enter to exit...");
        if let Err(e) = std::io::stdout().flush() {
            log::debug!("Could not flush prompt: {}", e);
        }

        let mut line = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
            log::debug!("Could not read acknowledgment: {}", e);
        }
    }
}
