//! Source-hosting API client

use dashboard_api::{
    ConnectionStatus, CreatedRepository, RepositoryDraft, RepositoryList, RepositoryRecord,
};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// Check whether a GitHub account is connected
    pub async fn get_github_status(&self) -> Result<ConnectionStatus, DashboardError> {
        self.get("/api/github/status").await
    }

    /// List repositories of the connected account
    pub async fn get_repositories(&self) -> Result<Vec<RepositoryRecord>, DashboardError> {
        let response: RepositoryList = self.get("/api/github/repositories").await?;
        Ok(response.repositories)
    }

    /// Create a repository from a draft
    pub async fn create_repository(
        &self,
        draft: &RepositoryDraft,
    ) -> Result<RepositoryRecord, DashboardError> {
        let response: CreatedRepository = self.post("/api/github/repositories", draft).await?;
        Ok(response.repository)
    }
}
