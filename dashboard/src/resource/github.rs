//! GitHub repositories resource

use std::sync::Arc;

use async_trait::async_trait;
use dashboard_api::{ConnectionStatus, RepositoryDraft, RepositoryRecord};

use crate::errors::DashboardError;
use crate::http::BackendApi;
use crate::resource::RemoteResource;

pub struct GithubRepositories {
    api: Arc<dyn BackendApi>,
}

impl GithubRepositories {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RemoteResource for GithubRepositories {
    type Record = RepositoryRecord;
    type Draft = RepositoryDraft;

    const NAME: &'static str = "GitHub";
    const RECORD: &'static str = "repository";

    async fn status(&self) -> Result<ConnectionStatus, DashboardError> {
        self.api.github_status().await
    }

    async fn list(&self) -> Result<Vec<RepositoryRecord>, DashboardError> {
        self.api.list_repositories().await
    }

    async fn create(&self, draft: &RepositoryDraft) -> Result<RepositoryRecord, DashboardError> {
        self.api.create_repository(draft).await
    }
}
