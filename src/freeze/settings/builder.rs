//! Builder for constructing BuildSettings.

use super::{BuildSettings, defaults};
use std::path::{Path, PathBuf};

/// Builder for constructing [`BuildSettings`].
///
/// Every field except the project directory and the interpreter falls back to
/// the fixed watcher layout in [`defaults`].
///
/// # See Also
///
/// - [`BuildSettings`] - The built settings struct
#[derive(Default)]
pub struct BuildSettingsBuilder {
    project_dir: Option<PathBuf>,
    python: Option<PathBuf>,
    entry_point: Option<PathBuf>,
    output_name: Option<String>,
    icon: Option<PathBuf>,
    hidden_imports: Option<Vec<String>>,
    resource_dirs: Option<Vec<PathBuf>>,
    dist_dir: Option<PathBuf>,
    work_dir: Option<PathBuf>,
}

impl BuildSettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the Python interpreter.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn python<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.python = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the entry-point script.
    ///
    /// Default: `main.py`
    pub fn entry_point<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry_point = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the executable name.
    ///
    /// Default: `FileWatcher`
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Sets the icon.
    ///
    /// Default: `icon.ico`
    pub fn icon<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.icon = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the hidden imports.
    pub fn hidden_imports(mut self, modules: Vec<String>) -> Self {
        self.hidden_imports = Some(modules);
        self
    }

    /// Sets the resource directories.
    pub fn resource_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.resource_dirs = Some(dirs);
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `dist`
    pub fn dist_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dist_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the work directory.
    ///
    /// Default: `build`
    pub fn work_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.work_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `project_dir`
    /// - `python`
    ///
    /// or if the output and work directories coincide, since cleanup of one
    /// would destroy the other mid-build.
    pub fn build(self) -> crate::freeze::Result<BuildSettings> {
        use crate::freeze::error::Context;

        let dist_dir = self
            .dist_dir
            .unwrap_or_else(|| PathBuf::from(defaults::DIST_DIR));
        let work_dir = self
            .work_dir
            .unwrap_or_else(|| PathBuf::from(defaults::WORK_DIR));

        if dist_dir == work_dir {
            crate::bail!(
                "output and work directories must differ (both are {})",
                dist_dir.display()
            );
        }

        Ok(BuildSettings::new(
            self.project_dir.context("project_dir is required")?,
            self.python.context("python is required")?,
            self.entry_point
                .unwrap_or_else(|| PathBuf::from(defaults::ENTRY_POINT)),
            self.output_name
                .unwrap_or_else(|| defaults::OUTPUT_NAME.to_string()),
            self.icon.unwrap_or_else(|| PathBuf::from(defaults::ICON)),
            self.hidden_imports.unwrap_or_else(|| {
                defaults::HIDDEN_IMPORTS
                    .iter()
                    .map(|m| m.to_string())
                    .collect()
            }),
            self.resource_dirs.unwrap_or_else(|| {
                defaults::RESOURCE_DIRS.iter().map(PathBuf::from).collect()
            }),
            dist_dir,
            work_dir,
        ))
    }
}
