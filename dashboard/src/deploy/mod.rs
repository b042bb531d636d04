//! Deployment center
//!
//! - [`steps`]: the four-step deployment timeline
//! - [`run`]: a timed, cancellable walk through that timeline
//! - [`center`]: the deployment form, quick-deploy presets and the active run

pub mod center;
pub mod run;
pub mod steps;

pub use center::{DeploymentCenter, DeploymentDraft, QuickDeployPreset, QUICK_DEPLOY_PRESETS};
pub use run::DeploymentRun;
pub use steps::{step_at, step_status, DeploymentStep, StepStatus};
