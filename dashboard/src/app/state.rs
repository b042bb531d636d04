//! Application state management

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::errors::DashboardError;
use crate::http::{BackendApi, HttpClient};
use crate::state::{status_store, Notifier, StatusView, StatusWriter};

/// Shared handles of a running dashboard
#[derive(Clone)]
pub struct AppState {
    /// Backend access
    pub api: Arc<dyn BackendApi>,

    /// Read-only view of the status aggregate
    pub status: StatusView,

    pub notifier: Notifier,
}

impl AppState {
    /// Connect to the backend and create the status store.
    ///
    /// The returned writer belongs to the status poller.
    pub fn init(
        backend_base_url: &str,
        request_timeout: Duration,
    ) -> Result<(Self, StatusWriter), DashboardError> {
        info!("Initializing application state for {}", backend_base_url);
        let client = HttpClient::new(backend_base_url, request_timeout)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    pub fn with_api(api: Arc<dyn BackendApi>) -> (Self, StatusWriter) {
        let (writer, status) = status_store();
        let state = Self {
            api,
            status,
            notifier: Notifier::default(),
        };
        (state, writer)
    }
}
