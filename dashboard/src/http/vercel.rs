//! Deployment-hosting API client

use dashboard_api::{
    ConnectionStatus, CreatedProject, DeployResponse, DeploymentInfo, ProjectDraft, ProjectList,
    ProjectRecord,
};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// Check whether a Vercel account is connected
    pub async fn get_vercel_status(&self) -> Result<ConnectionStatus, DashboardError> {
        self.get("/api/vercel/status").await
    }

    /// List projects of the connected account
    pub async fn get_projects(&self) -> Result<Vec<ProjectRecord>, DashboardError> {
        let response: ProjectList = self.get("/api/vercel/projects").await?;
        Ok(response.projects)
    }

    /// Create a project from a draft
    pub async fn create_project(
        &self,
        draft: &ProjectDraft,
    ) -> Result<ProjectRecord, DashboardError> {
        let response: CreatedProject = self.post("/api/vercel/projects", draft).await?;
        Ok(response.project)
    }

    /// Trigger a production deployment of a project
    pub async fn deploy_project(&self, project_id: &str) -> Result<DeploymentInfo, DashboardError> {
        let path =
            HttpClient::segment_path(&["api", "vercel", "projects", project_id, "deploy"])?;
        let response: DeployResponse = self.post_empty(&path).await?;
        Ok(response.deployment)
    }
}
