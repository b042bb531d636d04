//! Status aggregate store

use chrono::{DateTime, Utc};
use dashboard_api::{HealthSummary, PlatformStatus};
use serde::Serialize;
use tokio::sync::watch;

use crate::errors::DashboardError;

/// Process-wide record of backend, middleware and integration reachability
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Last successfully polled platform status, `None` until the first poll lands
    pub platform: Option<PlatformStatus>,

    /// Last successfully polled health summary
    pub health: Option<HealthSummary>,

    /// When any field was last replaced
    pub updated_at: Option<DateTime<Utc>>,
}

impl DashboardSnapshot {
    pub fn is_online(&self) -> bool {
        self.platform.as_ref().is_some_and(PlatformStatus::is_online)
    }
}

/// Create the status store, returning its only writer and a first view
pub fn status_store() -> (StatusWriter, StatusView) {
    let (tx, rx) = watch::channel(DashboardSnapshot::default());
    (StatusWriter { tx }, StatusView { rx })
}

/// The single writer of the status aggregate. Not `Clone`.
#[derive(Debug)]
pub struct StatusWriter {
    tx: watch::Sender<DashboardSnapshot>,
}

impl StatusWriter {
    /// Replace the platform status wholesale
    pub fn replace_platform(&self, status: PlatformStatus) {
        self.tx.send_modify(|snapshot| {
            snapshot.platform = Some(status);
            snapshot.updated_at = Some(Utc::now());
        });
    }

    /// Replace the health summary wholesale
    pub fn replace_health(&self, health: HealthSummary) {
        self.tx.send_modify(|snapshot| {
            snapshot.health = Some(health);
            snapshot.updated_at = Some(Utc::now());
        });
    }

    /// Hand out another read-only view
    pub fn view(&self) -> StatusView {
        StatusView {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only view of the status aggregate
#[derive(Debug, Clone)]
pub struct StatusView {
    rx: watch::Receiver<DashboardSnapshot>,
}

impl StatusView {
    /// Copy of the current snapshot
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.rx.borrow().clone()
    }

    /// Whether the aggregate "Online" indicator reads online
    pub fn is_online(&self) -> bool {
        self.rx.borrow().is_online()
    }

    /// Wait for the next replacement and return the new snapshot.
    ///
    /// Fails once the writer is gone.
    pub async fn changed(&mut self) -> Result<DashboardSnapshot, DashboardError> {
        self.rx
            .changed()
            .await
            .map_err(|_| DashboardError::ShutdownError("status writer dropped".to_string()))?;
        Ok(self.rx.borrow_and_update().clone())
    }
}
