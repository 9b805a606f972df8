//! Main freeze orchestration.
//!
//! This module provides the [`Orchestrator`] that walks a build through its
//! phases: dependency check, workspace cleanup, packaging and reporting.

use super::checksum::calculate_sha256;
use super::packaging::run_pyinstaller;
use super::phase::{BuildPhase, PhaseTracker};
use super::tool_detection::{install_packaging_tool, packaging_tool_available};
use crate::cli::RuntimeConfig;
use crate::freeze::report::{Artifact, format_bytes};
use crate::freeze::settings::BuildSettings;
use crate::freeze::settings::defaults::{PACKAGING_MODULE, PACKAGING_PACKAGE, SPEC_PATTERN};
use crate::freeze::utils::fs;
use crate::freeze::{Error, Result};

/// Result of one run: the phases visited and how it ended.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Phases in the order they were entered, `Start` first.
    pub phases: Vec<BuildPhase>,
    /// The artifact on success, the fatal error otherwise.
    pub result: Result<Artifact>,
}

impl BuildOutcome {
    /// Whether the run ended in [`BuildPhase::Done`].
    pub fn succeeded(&self) -> bool {
        self.result.is_ok() && self.phases.last() == Some(&BuildPhase::Done)
    }

    /// The produced artifact, if any.
    pub fn artifact(&self) -> Option<&Artifact> {
        self.result.as_ref().ok()
    }

    /// Whether `phase` was entered during the run.
    pub fn visited(&self, phase: BuildPhase) -> bool {
        self.phases.contains(&phase)
    }
}

/// Freeze orchestrator.
///
/// Every step is fatal on error and nothing is retried: a run either ends in
/// [`BuildPhase::Done`] with the artifact on disk, or in
/// [`BuildPhase::Failed`].
///
/// # Examples
///
/// ```no_run
/// use watcher_freeze::cli::{Args, RuntimeConfig};
/// use watcher_freeze::freeze::{BuildSettingsBuilder, Orchestrator};
///
/// # async fn example(args: &Args) -> watcher_freeze::freeze::Result<()> {
/// let settings = BuildSettingsBuilder::new()
///     .project_dir(".")
///     .python("python")
///     .build()?;
///
/// let runtime = RuntimeConfig::from(args);
/// let outcome = Orchestrator::new(settings).run(&runtime).await;
/// if let Some(artifact) = outcome.artifact() {
///     println!("{}", artifact.size_line());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Orchestrator {
    settings: BuildSettings,
}

impl Orchestrator {
    /// Creates a new orchestrator with the given settings.
    pub fn new(settings: BuildSettings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the build settings.
    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Runs the whole procedure once and reports the outcome to the operator.
    pub async fn run(&self, runtime: &RuntimeConfig) -> BuildOutcome {
        let mut tracker = PhaseTracker::new();
        let result = self.execute(&mut tracker, runtime).await;

        match &result {
            Ok(artifact) => {
                self.report_success(artifact, runtime);
                advance_or_log(&mut tracker, BuildPhase::Done);
            }
            Err(e) => {
                advance_or_log(&mut tracker, BuildPhase::ReportingFailure);
                log::error!("Build failed during {}: {}", failed_step(&tracker), e);
                runtime.error(&format!("Build failed: {}", e));
                advance_or_log(&mut tracker, BuildPhase::Failed);
            }
        }

        log::debug!("Visited phases: {:?}", tracker.history());

        BuildOutcome {
            phases: tracker.history().to_vec(),
            result,
        }
    }

    async fn execute(&self, tracker: &mut PhaseTracker, runtime: &RuntimeConfig) -> Result<Artifact> {
        let settings = &self.settings;

        tracker.advance(BuildPhase::CheckingDependency)?;
        runtime.section("Checking packaging tool");
        if packaging_tool_available(settings.python(), settings.project_dir()).await {
            runtime.success(&format!("{} is available", PACKAGING_MODULE));
        } else {
            tracker.advance(BuildPhase::InstallingDependency)?;
            runtime.warn(&format!(
                "{} not found, installing {}...",
                PACKAGING_MODULE, PACKAGING_PACKAGE
            ));
            install_packaging_tool(settings.python(), settings.project_dir()).await?;

            if !packaging_tool_available(settings.python(), settings.project_dir()).await {
                return Err(Error::DependencyUnavailable {
                    tool: PACKAGING_PACKAGE.to_string(),
                    reason: format!(
                        "installed but `import {}` still fails with {}",
                        PACKAGING_MODULE,
                        settings.python().display()
                    ),
                });
            }
            runtime.success(&format!("{} installed", PACKAGING_PACKAGE));
        }

        tracker.advance(BuildPhase::CleaningWorkspace)?;
        runtime.section("Cleaning previous build");
        self.clean_workspace(runtime).await?;

        tracker.advance(BuildPhase::Packaging)?;
        runtime.section("Packaging");
        self.check_inputs(runtime).await;
        run_pyinstaller(settings, runtime).await?;

        tracker.advance(BuildPhase::ReportingSuccess)?;
        self.inspect_artifact().await
    }

    /// Removes the output directory, the work directory and stale descriptors.
    async fn clean_workspace(&self, runtime: &RuntimeConfig) -> Result<()> {
        for dir in [self.settings.dist_path(), self.settings.work_path()] {
            if fs::remove_dir_all(&dir).await? {
                runtime.indent(&format!("Removed {}", dir.display()));
            }
        }

        let stale = fs::find_matching_files(self.settings.project_dir(), SPEC_PATTERN).await?;
        for spec in stale {
            if fs::remove_file(&spec).await? {
                runtime.indent(&format!("Removed {}", spec.display()));
            }
        }

        Ok(())
    }

    /// Warns about missing inputs; the bundler decides whether they are fatal.
    async fn check_inputs(&self, runtime: &RuntimeConfig) {
        for (path, description) in self.settings.inputs() {
            if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                log::warn!("Missing {}: {}", description, path.display());
                runtime.warn(&format!("Missing {}: {}", description, path.display()));
            }
        }
    }

    async fn inspect_artifact(&self) -> Result<Artifact> {
        let path = self.settings.artifact_path();
        let size = fs::file_size(&path).await?;
        let checksum = calculate_sha256(&path).await?;

        Ok(Artifact {
            path,
            size,
            checksum,
        })
    }

    fn report_success(&self, artifact: &Artifact, runtime: &RuntimeConfig) {
        log::info!("Built {}", artifact);
        runtime.success("Build completed successfully");
        runtime.indent(&format!("Artifact: {}", artifact.path.display()));
        runtime.indent(&format!("Size: {}", artifact.size_line()));
        runtime.indent(&format!("Approx: {}", format_bytes(artifact.size)));
        runtime.indent(&format!("SHA256: {}", artifact.checksum));
    }
}

/// The working phase a failure happened in.
fn failed_step(tracker: &PhaseTracker) -> BuildPhase {
    tracker
        .history()
        .iter()
        .rev()
        .copied()
        .find(|p| *p != BuildPhase::ReportingFailure)
        .unwrap_or(BuildPhase::Start)
}

fn advance_or_log(tracker: &mut PhaseTracker, next: BuildPhase) {
    if let Err(e) = tracker.advance(next) {
        log::error!("{}", e);
    }
}
