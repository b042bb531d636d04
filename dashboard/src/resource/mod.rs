//! Remote resources
//!
//! Every account-backed integration follows the same shape: a connection
//! status, a list of records, and a create call fed by a draft. This module
//! names that shape once so the panels can be written generically.

pub mod draft;
pub mod github;
pub mod records;
pub mod vercel;

use async_trait::async_trait;
use dashboard_api::ConnectionStatus;

use crate::errors::DashboardError;

pub use draft::{Draft, EnvField, EnvVarRows};
pub use github::GithubRepositories;
pub use records::{Identified, RecordList};
pub use vercel::VercelProjects;

/// Status in, list in, create out
#[async_trait]
pub trait RemoteResource: Send + Sync + 'static {
    type Record: Identified + Clone + Send + Sync + 'static;
    type Draft: Draft + Clone + Send + Sync + 'static;

    /// Integration name used in logs and notifications
    const NAME: &'static str;

    /// What one record is called
    const RECORD: &'static str;

    async fn status(&self) -> Result<ConnectionStatus, DashboardError>;

    async fn list(&self) -> Result<Vec<Self::Record>, DashboardError>;

    async fn create(&self, draft: &Self::Draft) -> Result<Self::Record, DashboardError>;
}
