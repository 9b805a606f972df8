//! Fixed build configuration for the STAT file watcher.
//!
//! These values describe the application layout the freeze targets. They are
//! compiled in and not read from any file at runtime.

/// Entry-point script, relative to the project directory.
pub const ENTRY_POINT: &str = "main.py";

/// Name of the produced executable (without platform extension).
pub const OUTPUT_NAME: &str = "FileWatcher";

/// Icon embedded into the executable.
pub const ICON: &str = "icon.ico";

/// Final output directory for the single-file artifact.
pub const DIST_DIR: &str = "dist";

/// Intermediate directory the bundler uses for its analysis and caches.
pub const WORK_DIR: &str = "build";

/// Glob matching stale build descriptors left by earlier runs.
pub const SPEC_PATTERN: &str = "*.spec";

/// Modules the bundler's import scanner misses.
///
/// The application imports its own packages inside `try` blocks and loads
/// the tray and notification backends lazily, so static analysis does not
/// see them.
pub const HIDDEN_IMPORTS: &[&str] = &[
    "config",
    "config.settings",
    "config.watch_rules",
    "core",
    "core.watcher",
    "core.file_handler",
    "core.utils",
    "ui",
    "ui.tray_app",
    "ui.notifications",
    "watchdog.observers",
    "pystray",
    "PIL.Image",
    "PIL.ImageDraw",
    "winotify",
];

/// Resource directories copied verbatim into the artifact.
pub const RESOURCE_DIRS: &[&str] = &["config", "core", "ui"];

/// Python package providing the bundler, as named on the package index.
pub const PACKAGING_PACKAGE: &str = "pyinstaller";

/// Python module name used to import and run the bundler.
pub const PACKAGING_MODULE: &str = "PyInstaller";

/// Interpreters tried, in order, when none is given explicitly.
pub const PYTHON_CANDIDATES: &[&str] = &["python", "python3"];
