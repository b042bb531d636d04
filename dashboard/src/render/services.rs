//! Vendor service catalog

use dashboard_api::{NvidiaStatus, ServiceStatus};
use serde::Serialize;

use crate::render::badge::{availability_badge, readiness_badge, Badge};

/// Static description of a vendor offering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorService {
    pub name: &'static str,
    pub key: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static VENDOR_SERVICES: &[VendorService] = &[
    VendorService {
        name: "GeForce NOW",
        key: "gfn",
        description: "Cloud gaming streaming service",
        features: &["Game streaming", "RTX support", "Low latency"],
    },
    VendorService {
        name: "CloudXR",
        key: "cloudxr",
        description: "Extended reality streaming platform",
        features: &["VR/AR streaming", "Multi-platform", "Real-time rendering"],
    },
    VendorService {
        name: "DLSS 4",
        key: "dlss",
        description: "AI-powered super resolution",
        features: &["AI upscaling", "Frame generation", "Ray reconstruction"],
    },
];

/// One rendered vendor service card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceRow {
    pub name: &'static str,
    pub key: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub status: String,
    pub badge: Badge,
    /// "Configure" when ready, "Setup" otherwise
    pub action: &'static str,
}

/// Render every catalog service; a missing status renders as unknown
pub fn service_rows(status: Option<&NvidiaStatus>) -> Vec<ServiceRow> {
    VENDOR_SERVICES
        .iter()
        .map(|service| {
            let current = status
                .and_then(|s| s.services.get(service.key))
                .cloned()
                .unwrap_or(ServiceStatus::Unknown);
            ServiceRow {
                name: service.name,
                key: service.key,
                description: service.description,
                features: service.features,
                status: current.to_string(),
                badge: readiness_badge(&current),
                action: if current.is_ready() { "Configure" } else { "Setup" },
            }
        })
        .collect()
}

/// GPU card of the vendor panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpuSummary {
    pub availability: Badge,
    pub name: String,
    pub memory: String,
}

pub fn gpu_summary(status: &NvidiaStatus) -> GpuSummary {
    let info = status.gpu_info.as_ref();
    GpuSummary {
        availability: availability_badge(status.gpu_available),
        name: info
            .and_then(|i| i.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        memory: info
            .and_then(|i| i.memory_text())
            .unwrap_or_else(|| "N/A".to_string()),
    }
}
