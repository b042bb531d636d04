//! Settings file management

use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DashboardError;
use crate::filesys::file::File;
use crate::logs::LogLevel;

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit JSON log lines
    #[serde(default)]
    pub json_logs: bool,

    /// Also write rotated log files to this directory
    #[serde(default)]
    pub log_dir: Option<String>,

    #[serde(default)]
    pub backend: BackendSettings,

    /// Status polling interval in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default)]
    pub server: ServerSettings,
}

fn default_poll_interval() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            json_logs: false,
            log_dir: None,
            backend: BackendSettings::default(),
            poll_interval_secs: default_poll_interval(),
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a file, falling back to defaults when it is missing
    pub async fn load(file: &File) -> Result<Self, DashboardError> {
        if !file.exists().await {
            debug!("No settings at {}, using defaults", file.path().display());
            return Ok(Self::default());
        }
        let settings: Settings = file.read_json().await.map_err(|e| {
            DashboardError::ConfigError(format!("{}: {}", file.path().display(), e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.poll_interval_secs == 0 {
            return Err(DashboardError::ConfigError(
                "poll_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.backend.request_timeout_secs == 0 {
            return Err(DashboardError::ConfigError(
                "backend.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Backend API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the platform backend
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl BackendSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Local status server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub enable: bool,

    #[serde(default = "default_server_host")]
    pub host: IpAddr,

    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_server_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_server_port() -> u16 {
    8787
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enable: false,
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}
