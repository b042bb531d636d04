//! Platform status poller

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::errors::DashboardError;
use crate::http::BackendApi;
use crate::state::{Notifier, StatusWriter};

/// Poller worker options
#[derive(Debug, Clone)]
pub struct Options {
    /// Time between two polls
    pub interval: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
        }
    }
}

/// Fetch platform status and health once and store whatever arrived.
///
/// A failed fetch leaves the previous value in place and publishes a
/// notification. Returns the first failure, if any.
pub async fn poll_once(
    api: &dyn BackendApi,
    writer: &StatusWriter,
    notifier: &Notifier,
) -> Result<(), DashboardError> {
    let (platform, health) = tokio::join!(api.platform_status(), api.health());

    let platform = match platform {
        Ok(status) => {
            debug!(
                "Platform status: backend={} middleware={}",
                status.backend, status.middleware
            );
            writer.replace_platform(status);
            Ok(())
        }
        Err(e) => {
            warn!("Platform status poll failed: {}", e);
            notifier.failure("Platform status unavailable", &e);
            Err(e)
        }
    };

    let health = match health {
        Ok(summary) => {
            debug!("Backend health: {}", summary.status);
            writer.replace_health(summary);
            Ok(())
        }
        Err(e) => {
            warn!("Health poll failed: {}", e);
            notifier.failure("Backend health unavailable", &e);
            Err(e)
        }
    };

    platform.and(health)
}

/// Run the poller worker.
///
/// Polls right away, then every `options.interval` until shutdown. An
/// in-flight poll is dropped on shutdown so nothing is written afterwards.
pub async fn run<S, F>(
    options: &Options,
    api: Arc<dyn BackendApi>,
    writer: StatusWriter,
    notifier: Notifier,
    sleep_fn: S,
    mut shutdown_signal: Pin<Box<dyn Future<Output = ()> + Send>>,
) where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    info!("Poller worker starting (interval {:?})", options.interval);

    loop {
        tokio::select! {
            _ = &mut shutdown_signal => {
                info!("Poller worker shutting down...");
                return;
            }
            _ = poll_once(api.as_ref(), &writer, &notifier) => {}
        }

        tokio::select! {
            _ = &mut shutdown_signal => {
                info!("Poller worker shutting down...");
                return;
            }
            _ = sleep_fn(options.interval) => {}
        }
    }
}
