//! Core BuildSettings struct and implementations.

use std::path::{Path, PathBuf};

/// Complete configuration for one freeze run.
///
/// Constructed via [`BuildSettingsBuilder`](super::BuildSettingsBuilder); all
/// relative paths are resolved against [`project_dir`](Self::project_dir),
/// which is also the working directory of every child process.
///
/// # Examples
///
/// ```no_run
/// use watcher_freeze::freeze::BuildSettingsBuilder;
///
/// # fn example() -> watcher_freeze::freeze::Result<()> {
/// let settings = BuildSettingsBuilder::new()
///     .project_dir(".")
///     .python("python3")
///     .build()?;
///
/// println!("artifact: {}", settings.artifact_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BuildSettings {
    /// Directory holding the application sources.
    project_dir: PathBuf,

    /// Python interpreter used to probe, install and run the bundler.
    python: PathBuf,

    /// Entry-point script, relative to the project directory.
    entry_point: PathBuf,

    /// Executable name without extension.
    output_name: String,

    /// Icon resource, relative to the project directory.
    icon: PathBuf,

    /// Modules force-included into the artifact.
    hidden_imports: Vec<String>,

    /// Directories bundled verbatim.
    resource_dirs: Vec<PathBuf>,

    /// Output directory name.
    dist_dir: PathBuf,

    /// Work directory name.
    work_dir: PathBuf,
}

impl BuildSettings {
    /// Returns the project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Returns the Python interpreter.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Returns the entry-point script (relative).
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Returns the executable name without extension.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Returns the icon path (relative).
    pub fn icon(&self) -> &Path {
        &self.icon
    }

    /// Returns the hidden-import module names.
    pub fn hidden_imports(&self) -> &[String] {
        &self.hidden_imports
    }

    /// Returns the resource directories (relative).
    pub fn resource_dirs(&self) -> &[PathBuf] {
        &self.resource_dirs
    }

    /// Returns the output directory (relative).
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Returns the work directory (relative).
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute-or-project-relative output directory.
    pub fn dist_path(&self) -> PathBuf {
        self.project_dir.join(&self.dist_dir)
    }

    /// Absolute-or-project-relative work directory.
    pub fn work_path(&self) -> PathBuf {
        self.project_dir.join(&self.work_dir)
    }

    /// Returns the full path the artifact must exist at after a successful build.
    ///
    /// Automatically appends `.exe` extension on Windows.
    pub fn artifact_path(&self) -> PathBuf {
        let mut path = self.dist_path().join(&self.output_name);

        if cfg!(target_os = "windows") {
            path.set_extension("exe");
        }

        path
    }

    /// Every input the bundler reads, paired with a short description.
    pub fn inputs(&self) -> Vec<(PathBuf, &'static str)> {
        let mut inputs = vec![
            (self.project_dir.join(&self.entry_point), "entry point"),
            (self.project_dir.join(&self.icon), "icon"),
        ];
        inputs.extend(
            self.resource_dirs
                .iter()
                .map(|dir| (self.project_dir.join(dir), "resource directory")),
        );
        inputs
    }

    /// Creates a new BuildSettings instance (used by BuildSettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        project_dir: PathBuf,
        python: PathBuf,
        entry_point: PathBuf,
        output_name: String,
        icon: PathBuf,
        hidden_imports: Vec<String>,
        resource_dirs: Vec<PathBuf>,
        dist_dir: PathBuf,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            project_dir,
            python,
            entry_point,
            output_name,
            icon,
            hidden_imports,
            resource_dirs,
            dist_dir,
            work_dir,
        }
    }
}
