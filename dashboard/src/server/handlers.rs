//! HTTP request handlers

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::render::{overview, Overview};
use crate::server::state::ServerState;
use crate::state::DashboardSnapshot;
use crate::utils::{version_info, VersionInfo};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "omnidash".to_string(),
        version: version_info().version,
    })
}

pub async fn version_handler() -> Json<VersionInfo> {
    Json(version_info())
}

/// Current snapshot together with its rendered badges
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub snapshot: DashboardSnapshot,
    pub overview: Overview,
}

pub async fn dashboard_handler(State(state): State<Arc<ServerState>>) -> Json<DashboardResponse> {
    let snapshot = state.status.snapshot();
    let overview = overview(&snapshot);
    Json(DashboardResponse { snapshot, overview })
}
