//! API models

mod common;
mod github;
mod nvidia;
mod platform;
mod vercel;

pub use common::{EnvVar, Framework, RecordId};
pub use github::{
    CreatedRepository, RepositoryDraft, RepositoryList, RepositoryRecord, GITHUB_FRAMEWORKS,
};
pub use nvidia::{GpuInfo, NvidiaStatus, ServiceStatus, VendorServices};
pub use platform::{ConnectionStatus, HealthSummary, PlatformStatus};
pub use vercel::{
    CreatedProject, DeployResponse, DeploymentInfo, ProjectDraft, ProjectList, ProjectRecord,
    VERCEL_FRAMEWORKS,
};

/// Error response
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// The most specific message the backend gave, if any
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.error.as_deref())
    }
}
