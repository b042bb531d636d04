//! Logs online indicator changes and notifications

use std::future::Future;
use std::pin::Pin;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

use crate::state::{Notification, NotificationLevel, StatusView};

fn log_notification(notification: &Notification) {
    match notification.level {
        NotificationLevel::Error | NotificationLevel::Warning => {
            warn!("{}: {}", notification.title, notification.message)
        }
        NotificationLevel::Success | NotificationLevel::Info => {
            info!("{}: {}", notification.title, notification.message)
        }
    }
}

/// What the status logger reported before it stopped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activity {
    /// Online/offline flips
    pub transitions: usize,
    pub notifications: usize,
}

/// Log until shutdown or until the status writer is gone
pub async fn run(
    mut view: StatusView,
    mut notifications: broadcast::Receiver<Notification>,
    mut shutdown_signal: Pin<Box<dyn Future<Output = ()> + Send>>,
) -> Activity {
    let mut activity = Activity::default();
    let mut online = view.is_online();
    let mut listening = true;

    loop {
        tokio::select! {
            _ = &mut shutdown_signal => {
                debug!("Status logger shutting down...");
                return activity;
            }
            changed = view.changed() => {
                let snapshot = match changed {
                    Ok(snapshot) => snapshot,
                    Err(_) => {
                        debug!("Status writer dropped, status logger stopping");
                        return activity;
                    }
                };
                if snapshot.is_online() == online {
                    continue;
                }
                online = snapshot.is_online();
                activity.transitions += 1;
                if online {
                    info!("Platform is online");
                } else {
                    warn!("Platform is offline");
                }
            }
            received = notifications.recv(), if listening => match received {
                Ok(notification) => {
                    activity.notifications += 1;
                    log_notification(&notification);
                }
                Err(RecvError::Lagged(skipped)) => debug!("Skipped {} notifications", skipped),
                Err(RecvError::Closed) => listening = false,
            },
        }
    }
}
