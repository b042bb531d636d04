//! GPU vendor panel

use std::sync::{Arc, Mutex, MutexGuard};

use dashboard_api::NvidiaStatus;
use tracing::{debug, warn};

use crate::errors::DashboardError;
use crate::http::BackendApi;
use crate::render::{gpu_summary, service_rows, GpuSummary, ServiceRow};
use crate::state::{Lifetime, Notifier, Slot};

#[derive(Default)]
struct NvidiaState {
    status: Option<NvidiaStatus>,
    loading: bool,
    last_error: Option<String>,
}

/// Read-only view of vendor service readiness and the detected GPU
pub struct NvidiaPanel {
    api: Arc<dyn BackendApi>,
    notifier: Notifier,
    lifetime: Lifetime,
    state: Mutex<NvidiaState>,
}

impl NvidiaPanel {
    pub fn new(api: Arc<dyn BackendApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            lifetime: Lifetime::new(),
            state: Mutex::new(NvidiaState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, NvidiaState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub async fn refresh(&self) -> Result<(), DashboardError> {
        let ticket = self.lifetime.ticket(Slot::Status);
        self.state().loading = true;

        let result = self.api.nvidia_status().await;
        if !self.lifetime.is_current(&ticket) {
            debug!("Dropping stale vendor status response");
            return Ok(());
        }

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(status) => {
                state.status = Some(status);
                state.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Vendor status check failed: {}", e);
                state.last_error = Some(e.to_string());
                drop(state);
                self.notifier.failure("Vendor status check failed", &e);
                Err(e)
            }
        }
    }

    pub fn status(&self) -> Option<NvidiaStatus> {
        self.state().status.clone()
    }

    /// One row per catalog service; unknown until the first fetch lands
    pub fn service_rows(&self) -> Vec<ServiceRow> {
        service_rows(self.state().status.as_ref())
    }

    pub fn gpu_summary(&self) -> Option<GpuSummary> {
        self.state().status.as_ref().map(gpu_summary)
    }

    pub fn loading(&self) -> bool {
        self.state().loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }

    pub fn unmount(&self) {
        self.lifetime.unmount();
    }
}
