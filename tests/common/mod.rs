//! Shared test helpers: a watcher project skeleton and a scriptable fake
//! Python interpreter standing in for pip and PyInstaller.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Fake interpreter.
///
/// Behaviour is driven by marker files next to the script:
/// - `installed`          import probe succeeds
/// - `pip_fails`          `-m pip install` exits 1
/// - `pyinstaller_fails`  `-m PyInstaller` exits 1 after printing to stderr
/// - `skip_artifact`      `-m PyInstaller` exits 0 without writing the artifact
/// - `artifact_size`      byte count of the written artifact (default 4096)
/// - `noisy_output`       `-m PyInstaller` writes a Latin-1 line to both
///                        streams, then thousands more lines, before building
///
/// Every invocation is appended to `calls.log`. If the output or work
/// directory exists when PyInstaller starts, `saw_stale_output` is created.
const FAKE_PYTHON: &str = r#"#!/bin/sh
state="$(dirname "$0")"
echo "$*" >> "$state/calls.log"

case "$1" in
  -c)
    [ -f "$state/installed" ] && exit 0
    exit 1
    ;;
  -m)
    case "$2" in
      pip)
        if [ -f "$state/pip_fails" ]; then
          echo "ERROR: Could not find a version that satisfies the requirement pyinstaller" >&2
          exit 1
        fi
        echo "Successfully installed pyinstaller"
        touch "$state/installed"
        exit 0
        ;;
      PyInstaller)
        shift 2
        name=""
        dist=""
        work=""
        while [ $# -gt 0 ]; do
          case "$1" in
            --name) name="$2"; shift 2 ;;
            --distpath) dist="$2"; shift 2 ;;
            --workpath) work="$2"; shift 2 ;;
            *) shift ;;
          esac
        done
        if [ -e "$dist" ] || [ -e "$work" ]; then
          touch "$state/saw_stale_output"
        fi
        echo "INFO: Building EXE from EXE-00.toc" >&2
        if [ -f "$state/noisy_output" ]; then
          printf 'INFO: Project root C:\\Users\\Andr\351\n'
          printf 'INFO: Project root C:\\Users\\Andr\351\n' >&2
          i=0
          while [ "$i" -lt 5000 ]; do
            echo "INFO: Analyzing hidden import $i"
            echo "DEBUG: Processing module hook $i" >&2
            i=$((i + 1))
          done
        fi
        if [ -f "$state/pyinstaller_fails" ]; then
          echo "ERROR: Unable to find 'icon.ico' when adding binary and data files." >&2
          exit 1
        fi
        mkdir -p "$work" "$dist"
        if [ -f "$state/skip_artifact" ]; then
          exit 0
        fi
        size=4096
        if [ -f "$state/artifact_size" ]; then
          size="$(cat "$state/artifact_size")"
        fi
        head -c "$size" /dev/zero > "$dist/$name"
        echo "INFO: Building EXE from EXE-00.toc completed successfully." >&2
        exit 0
        ;;
    esac
    ;;
esac
exit 2
"#;

/// Isolated project plus fake interpreter.
pub struct TestEnv {
    pub temp: TempDir,
    pub project: PathBuf,
    pub tools: PathBuf,
}

impl TestEnv {
    /// Project with every input present and PyInstaller already installed.
    pub fn new() -> Self {
        let env = Self::without_pyinstaller();
        env.mark("installed");
        env
    }

    /// Project with every input present and PyInstaller missing.
    pub fn without_pyinstaller() -> Self {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("watcher");
        let tools = temp.path().join("tools");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::create_dir_all(&tools).unwrap();

        std::fs::write(project.join("main.py"), "print('watcher')\n").unwrap();
        std::fs::write(project.join("icon.ico"), [0u8, 0, 1, 0]).unwrap();
        for dir in ["config", "core", "ui"] {
            std::fs::create_dir_all(project.join(dir)).unwrap();
            std::fs::write(project.join(dir).join("__init__.py"), "").unwrap();
        }

        let python = tools.join("python");
        std::fs::write(&python, FAKE_PYTHON).unwrap();
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            temp,
            project,
            tools,
        }
    }

    pub fn python(&self) -> PathBuf {
        self.tools.join("python")
    }

    /// Creates a behaviour marker for the fake interpreter.
    pub fn mark(&self, marker: &str) {
        std::fs::write(self.tools.join(marker), "").unwrap();
    }

    pub fn set_artifact_size(&self, bytes: u64) {
        std::fs::write(self.tools.join("artifact_size"), bytes.to_string()).unwrap();
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.tools.join(marker).exists()
    }

    /// Invocations recorded by the fake interpreter, one per line.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.tools.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn packaging_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.starts_with("-m PyInstaller"))
            .count()
    }

    pub fn artifact(&self) -> PathBuf {
        self.project.join("dist").join("FileWatcher")
    }

    /// Entries in `dist/`, sorted by name.
    pub fn dist_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.project.join("dist"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.project.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.project.join(relative_path).exists()
    }

    /// Binary invocation against this project, non-interactive.
    pub fn cmd(&self) -> Command {
        let mut cmd = freeze_cmd();
        cmd.arg("--project-dir")
            .arg(&self.project)
            .arg("--python")
            .arg(self.python())
            .arg("--no-pause")
            .env_remove("WATCHER_FREEZE_PYTHON")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Get a Command for the watcher_freeze binary.
pub fn freeze_cmd() -> Command {
    cargo_bin_cmd!("watcher_freeze")
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
