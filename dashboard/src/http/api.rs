//! Backend API trait

use async_trait::async_trait;
use dashboard_api::{
    ConnectionStatus, DeploymentInfo, HealthSummary, NvidiaStatus, PlatformStatus, ProjectDraft,
    ProjectRecord, RepositoryDraft, RepositoryRecord,
};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

/// Every backend endpoint the dashboard consumes.
///
/// Implemented by [`HttpClient`]; panels and workers only see this trait so
/// tests can substitute an in-memory backend.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `GET /api/status`
    async fn platform_status(&self) -> Result<PlatformStatus, DashboardError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthSummary, DashboardError>;

    /// `GET /api/nvidia/status`
    async fn nvidia_status(&self) -> Result<NvidiaStatus, DashboardError>;

    /// `GET /api/github/status`
    async fn github_status(&self) -> Result<ConnectionStatus, DashboardError>;

    /// `GET /api/github/repositories`
    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>, DashboardError>;

    /// `POST /api/github/repositories`
    async fn create_repository(
        &self,
        draft: &RepositoryDraft,
    ) -> Result<RepositoryRecord, DashboardError>;

    /// `GET /api/vercel/status`
    async fn vercel_status(&self) -> Result<ConnectionStatus, DashboardError>;

    /// `GET /api/vercel/projects`
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, DashboardError>;

    /// `POST /api/vercel/projects`
    async fn create_project(&self, draft: &ProjectDraft) -> Result<ProjectRecord, DashboardError>;

    /// `POST /api/vercel/projects/:id/deploy`
    async fn deploy_project(&self, project_id: &str) -> Result<DeploymentInfo, DashboardError>;
}

#[async_trait]
impl BackendApi for HttpClient {
    async fn platform_status(&self) -> Result<PlatformStatus, DashboardError> {
        self.get_platform_status().await
    }

    async fn health(&self) -> Result<HealthSummary, DashboardError> {
        self.get_health().await
    }

    async fn nvidia_status(&self) -> Result<NvidiaStatus, DashboardError> {
        self.get_nvidia_status().await
    }

    async fn github_status(&self) -> Result<ConnectionStatus, DashboardError> {
        self.get_github_status().await
    }

    async fn list_repositories(&self) -> Result<Vec<RepositoryRecord>, DashboardError> {
        self.get_repositories().await
    }

    async fn create_repository(
        &self,
        draft: &RepositoryDraft,
    ) -> Result<RepositoryRecord, DashboardError> {
        HttpClient::create_repository(self, draft).await
    }

    async fn vercel_status(&self) -> Result<ConnectionStatus, DashboardError> {
        self.get_vercel_status().await
    }

    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, DashboardError> {
        self.get_projects().await
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<ProjectRecord, DashboardError> {
        HttpClient::create_project(self, draft).await
    }

    async fn deploy_project(&self, project_id: &str) -> Result<DeploymentInfo, DashboardError> {
        HttpClient::deploy_project(self, project_id).await
    }
}
