//! Status badges

use std::fmt;

use dashboard_api::{PlatformStatus, ServiceStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    /// Warning presentation, also used for anything unrecognized
    Yellow,
    Red,
    Gray,
    Blue,
}

/// A label and the color it is shown in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: BadgeColor,
}

impl Badge {
    pub fn new(label: impl Into<String>, color: BadgeColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.color == BadgeColor::Yellow
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Known status strings reported by vendor services, health checks and sessions
static STATUS_TABLE: &[(&str, &str, BadgeColor)] = &[
    ("available", "Available", BadgeColor::Green),
    ("ready", "Ready", BadgeColor::Green),
    ("running", "Running", BadgeColor::Green),
    ("healthy", "Healthy", BadgeColor::Green),
    ("connected", "Connected", BadgeColor::Green),
    ("active", "Active", BadgeColor::Green),
    ("not_configured", "Not Configured", BadgeColor::Yellow),
    ("unknown", "Unknown", BadgeColor::Gray),
    ("inactive", "Inactive", BadgeColor::Gray),
    ("disconnected", "Disconnected", BadgeColor::Gray),
    ("initializing", "Initializing", BadgeColor::Blue),
    ("checking", "Checking", BadgeColor::Blue),
    ("connecting", "Connecting", BadgeColor::Blue),
    ("unavailable", "Unavailable", BadgeColor::Red),
    ("error", "Error", BadgeColor::Red),
];

/// Badge for a raw status string.
///
/// Unrecognized values keep their text and get the warning color.
pub fn status_badge(raw: &str) -> Badge {
    let key = raw.trim().to_ascii_lowercase();
    match STATUS_TABLE.iter().find(|(value, _, _)| *value == key) {
        Some((_, label, color)) => Badge::new(*label, *color),
        None if key.is_empty() => Badge::new("Unknown", BadgeColor::Yellow),
        None => Badge::new(raw.trim(), BadgeColor::Yellow),
    }
}

pub fn service_badge(status: &ServiceStatus) -> Badge {
    status_badge(status.as_str())
}

/// Two-state presentation of the vendor panel: ready or not configured
pub fn readiness_badge(status: &ServiceStatus) -> Badge {
    if status.is_ready() {
        Badge::new("Ready", BadgeColor::Green)
    } else {
        Badge::new("Not Configured", BadgeColor::Yellow)
    }
}

pub fn connection_badge(connected: bool) -> Badge {
    if connected {
        Badge::new("Connected", BadgeColor::Green)
    } else {
        Badge::new("Not Connected", BadgeColor::Red)
    }
}

/// The aggregate "Online" indicator
pub fn online_badge(status: Option<&PlatformStatus>) -> Badge {
    if status.is_some_and(PlatformStatus::is_online) {
        Badge::new("Online", BadgeColor::Green)
    } else {
        Badge::new("Offline", BadgeColor::Red)
    }
}

pub fn availability_badge(available: bool) -> Badge {
    if available {
        Badge::new("Available", BadgeColor::Green)
    } else {
        Badge::new("Not Detected", BadgeColor::Yellow)
    }
}

pub fn live_badge(live: bool) -> Badge {
    if live {
        Badge::new("Live", BadgeColor::Green)
    } else {
        Badge::new("Not deployed", BadgeColor::Gray)
    }
}
