//! GPU vendor service models

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::common::{lenient_flag, lenient_opt_text, value_text};

/// Readiness of one vendor service.
///
/// Strings outside the known set are kept in `Other` so they can still be
/// displayed with the fallback presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServiceStatus {
    Available,
    NotConfigured,
    Ready,
    #[default]
    Unknown,
    Initializing,
    Unavailable,
    Error,
    Other(String),
}

impl ServiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceStatus::Available => "available",
            ServiceStatus::NotConfigured => "not_configured",
            ServiceStatus::Ready => "ready",
            ServiceStatus::Unknown => "unknown",
            ServiceStatus::Initializing => "initializing",
            ServiceStatus::Unavailable => "unavailable",
            ServiceStatus::Error => "error",
            ServiceStatus::Other(raw) => raw,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ServiceStatus::Ready)
    }
}

impl From<&str> for ServiceStatus {
    fn from(s: &str) -> Self {
        match s {
            "available" => ServiceStatus::Available,
            "not_configured" => ServiceStatus::NotConfigured,
            "ready" => ServiceStatus::Ready,
            "unknown" | "" => ServiceStatus::Unknown,
            "initializing" => ServiceStatus::Initializing,
            "unavailable" => ServiceStatus::Unavailable,
            "error" => ServiceStatus::Error,
            other => ServiceStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = value_text(serde_json::Value::deserialize(deserializer)?);
        Ok(ServiceStatus::from(raw.as_str()))
    }
}

/// Per-service readiness of the vendor offerings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorServices {
    /// Cloud game streaming
    pub gfn: ServiceStatus,
    /// XR streaming
    pub cloudxr: ServiceStatus,
    /// AI upscaling
    pub dlss: ServiceStatus,
}

impl VendorServices {
    /// Status by catalog key
    pub fn get(&self, key: &str) -> Option<&ServiceStatus> {
        match key {
            "gfn" => Some(&self.gfn),
            "cloudxr" => Some(&self.cloudxr),
            "dlss" => Some(&self.dlss),
            _ => None,
        }
    }
}

/// GPU description, when the backend found one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuInfo {
    #[serde(deserialize_with = "lenient_opt_text")]
    pub name: Option<String>,

    /// Reported either as a number of bytes or as preformatted text
    pub memory: Option<serde_json::Value>,
}

impl GpuInfo {
    pub fn memory_text(&self) -> Option<String> {
        match self.memory.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Response of `GET /api/nvidia/status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NvidiaStatus {
    #[serde(deserialize_with = "lenient_flag")]
    pub gpu_available: bool,
    pub gpu_info: Option<GpuInfo>,
    pub services: VendorServices,
}
