//! View rendering
//!
//! Pure lookups from status values to display badges. Nothing here keeps
//! state or performs I/O.

pub mod badge;
pub mod overview;
pub mod services;

pub use badge::{
    availability_badge, connection_badge, live_badge, online_badge, readiness_badge,
    service_badge, status_badge, Badge, BadgeColor,
};
pub use overview::{overview, NamedBadge, Overview};
pub use services::{gpu_summary, service_rows, GpuSummary, ServiceRow, VendorService, VENDOR_SERVICES};
