//! GPU vendor API client

use dashboard_api::NvidiaStatus;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// Get GPU availability and vendor service readiness
    pub async fn get_nvidia_status(&self) -> Result<NvidiaStatus, DashboardError> {
        self.get("/api/nvidia/status").await
    }
}
