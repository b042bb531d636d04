//! Transient notifications

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::errors::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A short-lived message for whoever is watching
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Broadcasts notifications to every subscriber
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Publish a notification; nobody listening is not an error
    pub fn publish(
        &self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            level,
            title: title.into(),
            message: message.into(),
            at: Utc::now(),
        };
        if self.tx.send(notification.clone()).is_err() {
            debug!("Notification dropped, no subscribers: {}", notification.title);
        }
        notification
    }

    pub fn failure(&self, title: impl Into<String>, err: &DashboardError) -> Notification {
        self.publish(NotificationLevel::Error, title, err.to_string())
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> Notification {
        self.publish(NotificationLevel::Success, title, message)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}
