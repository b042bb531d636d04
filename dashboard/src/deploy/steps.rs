//! Deployment steps

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One stage of a deployment, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStep {
    Github,
    Configure,
    Deploy,
    Complete,
}

impl DeploymentStep {
    pub const ALL: [DeploymentStep; 4] = [
        DeploymentStep::Github,
        DeploymentStep::Configure,
        DeploymentStep::Deploy,
        DeploymentStep::Complete,
    ];

    /// Time between two consecutive steps
    pub const INTERVAL: Duration = Duration::from_secs(2);

    pub fn id(self) -> &'static str {
        match self {
            DeploymentStep::Github => "github",
            DeploymentStep::Configure => "configure",
            DeploymentStep::Deploy => "deploy",
            DeploymentStep::Complete => "complete",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DeploymentStep::Github => "GitHub Repository",
            DeploymentStep::Configure => "Configuration",
            DeploymentStep::Deploy => "Deploy to Vercel",
            DeploymentStep::Complete => "Complete",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeploymentStep::Github => "Create or select repository",
            DeploymentStep::Configure => "Set build and environment settings",
            DeploymentStep::Deploy => "Build and deploy to production",
            DeploymentStep::Complete => "Your application is live",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<DeploymentStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Offset from the start of a run at which this step is reached
    pub fn offset(self) -> Duration {
        Self::INTERVAL * self.index() as u32
    }
}

impl fmt::Display for DeploymentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The step a run shows `elapsed` after it started
pub fn step_at(elapsed: Duration) -> DeploymentStep {
    DeploymentStep::ALL
        .iter()
        .rev()
        .copied()
        .find(|step| elapsed >= step.offset())
        .unwrap_or(DeploymentStep::Github)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// How `step` is displayed while `current` is the active step
pub fn step_status(current: Option<DeploymentStep>, step: DeploymentStep) -> StepStatus {
    match current {
        Some(current) if step < current => StepStatus::Completed,
        Some(current) if step == current => StepStatus::Active,
        _ => StepStatus::Pending,
    }
}
