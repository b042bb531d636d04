//! Server state

use crate::state::StatusView;

/// Server state shared across handlers
pub struct ServerState {
    pub status: StatusView,
}

impl ServerState {
    pub fn new(status: StatusView) -> Self {
        Self { status }
    }
}
