//! Platform status API client

use dashboard_api::{HealthSummary, PlatformStatus};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// Get the platform-wide reachability flags
    pub async fn get_platform_status(&self) -> Result<PlatformStatus, DashboardError> {
        self.get("/api/status").await
    }

    /// Get the backend health summary
    pub async fn get_health(&self) -> Result<HealthSummary, DashboardError> {
        self.get("/health").await
    }
}
