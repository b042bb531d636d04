//! Deployment form and presets

use std::future::Future;
use std::time::Duration;

use dashboard_api::{EnvVar, ProjectDraft, ProjectRecord};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::deploy::run::DeploymentRun;
use crate::deploy::steps::{step_status, DeploymentStep, StepStatus};
use crate::errors::DashboardError;
use crate::resource::{Draft, EnvVarRows, RemoteResource, VercelProjects};
use crate::state::Notifier;

/// A one-click framework setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickDeployPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub framework: &'static str,
    pub description: &'static str,
    pub build_command: &'static str,
    pub output_directory: &'static str,
}

pub static QUICK_DEPLOY_PRESETS: &[QuickDeployPreset] = &[
    QuickDeployPreset {
        key: "nextjs",
        name: "Next.js App",
        framework: "nextjs",
        description: "React framework with SSR and static generation",
        build_command: "npm run build",
        output_directory: ".next",
    },
    QuickDeployPreset {
        key: "react",
        name: "React App",
        framework: "react",
        description: "Single-page application with Create React App",
        build_command: "npm run build",
        output_directory: "build",
    },
    QuickDeployPreset {
        key: "svelte",
        name: "Svelte App",
        framework: "svelte",
        description: "Compiled frontend framework",
        build_command: "npm run build",
        output_directory: "dist",
    },
    QuickDeployPreset {
        key: "python",
        name: "Python API",
        framework: "python",
        description: "FastAPI or Flask backend",
        build_command: "pip install -r requirements.txt",
        output_directory: "",
    },
];

impl QuickDeployPreset {
    pub fn find(key: &str) -> Option<&'static QuickDeployPreset> {
        QUICK_DEPLOY_PRESETS
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
    }
}

/// Deployment form state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentDraft {
    pub project_name: String,
    pub repository: String,
    pub framework: String,
    pub build_command: String,
    pub output_directory: String,
    pub environment_vars: Vec<EnvVar>,
}

impl Default for DeploymentDraft {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            repository: String::new(),
            framework: "nextjs".to_string(),
            build_command: String::new(),
            output_directory: String::new(),
            environment_vars: Vec::new(),
        }
    }
}

impl DeploymentDraft {
    /// Overwrite framework, build command and output directory; keep the rest
    pub fn apply_preset(&mut self, preset: &QuickDeployPreset) {
        self.framework = preset.framework.to_string();
        self.build_command = preset.build_command.to_string();
        self.output_directory = preset.output_directory.to_string();
    }

    pub fn to_project_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.project_name.trim().to_string(),
            framework: self.framework.clone(),
            git_repo: self.repository.clone(),
            environment_vars: self.filled_env_vars(),
        }
    }
}

impl Draft for DeploymentDraft {
    fn required_name(&self) -> &str {
        &self.project_name
    }
}

impl EnvVarRows for DeploymentDraft {
    fn env_vars(&self) -> &[EnvVar] {
        &self.environment_vars
    }

    fn env_vars_mut(&mut self) -> &mut Vec<EnvVar> {
        &mut self.environment_vars
    }
}

/// Deployment form plus at most one active run
pub struct DeploymentCenter {
    projects: VercelProjects,
    notifier: Notifier,
    draft: DeploymentDraft,
    run: Option<DeploymentRun>,
}

impl DeploymentCenter {
    pub fn new(projects: VercelProjects, notifier: Notifier) -> Self {
        Self {
            projects,
            notifier,
            draft: DeploymentDraft::default(),
            run: None,
        }
    }

    pub fn draft(&self) -> &DeploymentDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DeploymentDraft {
        &mut self.draft
    }

    pub fn apply_preset(&mut self, preset: &QuickDeployPreset) {
        self.draft.apply_preset(preset);
    }

    /// Whether the start action is enabled
    pub fn can_start(&self) -> bool {
        self.draft.is_submittable()
    }

    /// Start a new run, cancelling any previous one
    pub fn start<S, F>(
        &mut self,
        sleep_fn: S,
    ) -> Result<watch::Receiver<Option<DeploymentStep>>, DashboardError>
    where
        S: Fn(Duration) -> F + Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        if !self.can_start() {
            return Err(DashboardError::Validation(
                "project name is required".to_string(),
            ));
        }
        self.cancel();

        info!("Starting deployment of '{}'", self.draft.project_name.trim());
        let run = DeploymentRun::start(sleep_fn);
        let rx = run.subscribe();
        self.run = Some(run);
        Ok(rx)
    }

    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            run.cancel();
        }
    }

    /// Active step, `None` before the first start
    pub fn current_step(&self) -> Option<DeploymentStep> {
        self.run.as_ref().and_then(DeploymentRun::current)
    }

    /// Every step with how it is displayed right now
    pub fn steps(&self) -> Vec<(DeploymentStep, StepStatus)> {
        let current = self.current_step();
        DeploymentStep::ALL
            .iter()
            .map(|&step| (step, step_status(current, step)))
            .collect()
    }

    /// Create the hosting project described by the form.
    ///
    /// The form is reset only when the project was created.
    pub async fn create_project(&mut self) -> Result<ProjectRecord, DashboardError> {
        if !self.draft.is_submittable() {
            return Err(DashboardError::Validation(
                "project name is required".to_string(),
            ));
        }

        let draft = self.draft.to_project_draft();
        match self.projects.create(&draft).await {
            Ok(project) => {
                info!("Created project '{}' ({})", project.name, project.id);
                self.notifier.success("Project created", project.name.clone());
                self.draft.reset();
                Ok(project)
            }
            Err(e) => {
                warn!("Failed to create project '{}': {}", draft.name, e);
                self.notifier.failure("Failed to create project", &e);
                Err(e)
            }
        }
    }
}
