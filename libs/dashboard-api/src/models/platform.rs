//! Platform-wide status models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::common::{lenient_flag, lenient_text, lenient_text_map};

/// Reachability flags returned by `GET /api/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStatus {
    #[serde(deserialize_with = "lenient_flag")]
    pub backend: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub middleware: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub nvidia: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub github: bool,
    #[serde(deserialize_with = "lenient_flag")]
    pub vercel: bool,
}

impl PlatformStatus {
    /// The platform is online when both the backend and the middleware answer
    pub fn is_online(&self) -> bool {
        self.backend && self.middleware
    }

    /// Integration flags in display order
    pub fn integrations(&self) -> [(&'static str, bool); 3] {
        [
            ("nvidia", self.nvidia),
            ("github", self.github),
            ("vercel", self.vercel),
        ]
    }
}

/// Health summary returned by `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,

    /// Non-string values are kept as their JSON text
    #[serde(default, deserialize_with = "lenient_text_map")]
    pub services: BTreeMap<String, String>,

    /// Anything else the backend reports
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Connection flag of an account-backed integration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub connected: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
}
