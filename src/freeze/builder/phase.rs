//! Build phase state machine.
//!
//! ```text
//! Start → CheckingDependency → (InstallingDependency)? → CleaningWorkspace
//!       → Packaging → ReportingSuccess → Done
//! any working phase → ReportingFailure → Failed
//! ```

use std::fmt;

/// One phase of a freeze run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildPhase {
    Start,
    CheckingDependency,
    InstallingDependency,
    CleaningWorkspace,
    Packaging,
    ReportingSuccess,
    ReportingFailure,
    Done,
    Failed,
}

impl BuildPhase {
    /// Whether the run ends in this phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether `next` may follow `self`.
    pub fn can_transition_to(self, next: BuildPhase) -> bool {
        use BuildPhase::*;

        match (self, next) {
            (Start, CheckingDependency) => true,
            (CheckingDependency, InstallingDependency | CleaningWorkspace) => true,
            (InstallingDependency, CleaningWorkspace) => true,
            (CleaningWorkspace, Packaging) => true,
            (Packaging, ReportingSuccess) => true,
            (ReportingSuccess, Done) => true,
            (ReportingFailure, Failed) => true,
            (
                CheckingDependency
                | InstallingDependency
                | CleaningWorkspace
                | Packaging
                | ReportingSuccess,
                ReportingFailure,
            ) => true,
            _ => false,
        }
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::CheckingDependency => "checking dependency",
            Self::InstallingDependency => "installing dependency",
            Self::CleaningWorkspace => "cleaning workspace",
            Self::Packaging => "packaging",
            Self::ReportingSuccess => "reporting success",
            Self::ReportingFailure => "reporting failure",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Ordered record of the phases a run has visited.
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    history: Vec<BuildPhase>,
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseTracker {
    /// Starts a new history in [`BuildPhase::Start`].
    pub fn new() -> Self {
        Self {
            history: vec![BuildPhase::Start],
        }
    }

    /// The phase the run is currently in.
    pub fn current(&self) -> BuildPhase {
        self.history
            .last()
            .copied()
            .unwrap_or(BuildPhase::Start)
    }

    /// Moves to `next`, rejecting edges the state machine does not allow.
    pub fn advance(&mut self, next: BuildPhase) -> crate::freeze::Result<()> {
        let current = self.current();
        if !current.can_transition_to(next) {
            crate::bail!("illegal build phase transition: {} -> {}", current, next);
        }
        log::debug!("Build phase: {} -> {}", current, next);
        self.history.push(next);
        Ok(())
    }

    /// Every phase visited so far, starting with [`BuildPhase::Start`].
    pub fn history(&self) -> &[BuildPhase] {
        &self.history
    }

    /// Whether `phase` was ever entered.
    pub fn visited(&self, phase: BuildPhase) -> bool {
        self.history.contains(&phase)
    }
}
