//! Error types for the dashboard

use thiserror::Error;

/// Main error type for the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    NotOk { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

impl DashboardError {
    /// True for the two request failures the dashboard distinguishes
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::Network(_) | DashboardError::NotOk { .. } | DashboardError::Decode(_)
        )
    }
}

impl From<url::ParseError> for DashboardError {
    fn from(err: url::ParseError) -> Self {
        DashboardError::ConfigError(format!("invalid URL: {}", err))
    }
}
