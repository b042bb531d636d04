//! Vercel projects resource

use std::sync::Arc;

use async_trait::async_trait;
use dashboard_api::{ConnectionStatus, DeploymentInfo, ProjectDraft, ProjectRecord};

use crate::errors::DashboardError;
use crate::http::BackendApi;
use crate::resource::RemoteResource;

pub struct VercelProjects {
    api: Arc<dyn BackendApi>,
}

impl VercelProjects {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        Self { api }
    }

    /// Trigger a deployment of an existing project
    pub async fn deploy(&self, project_id: &str) -> Result<DeploymentInfo, DashboardError> {
        self.api.deploy_project(project_id).await
    }
}

#[async_trait]
impl RemoteResource for VercelProjects {
    type Record = ProjectRecord;
    type Draft = ProjectDraft;

    const NAME: &'static str = "Vercel";
    const RECORD: &'static str = "project";

    async fn status(&self) -> Result<ConnectionStatus, DashboardError> {
        self.api.vercel_status().await
    }

    async fn list(&self) -> Result<Vec<ProjectRecord>, DashboardError> {
        self.api.list_projects().await
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<ProjectRecord, DashboardError> {
        self.api.create_project(draft).await
    }
}
