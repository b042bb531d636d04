//! A throwaway platform backend served over loopback

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct Recorded {
    pub bodies: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Recorded {
    pub fn bodies(&self) -> Vec<(String, Value)> {
        self.bodies.lock().unwrap().clone()
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "backend": true,
        "middleware": true,
        "nvidia": false,
        "github": true,
        "vercel": false
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "services": {"backend": "running", "nvidia_sdks": "checking"},
        "version": "1.0.0"
    }))
}

async fn nvidia() -> Json<Value> {
    Json(json!({
        "gpu_available": true,
        "gpu_info": {"name": "RTX 4090", "memory": 24576},
        "services": {"gfn": "ready", "cloudxr": "not_configured", "dlss": "unknown"}
    }))
}

async fn github_status() -> Json<Value> {
    Json(json!({"connected": false, "error": "GitHub token not configured"}))
}

async fn repositories() -> Json<Value> {
    Json(json!({"repositories": [
        {"id": 1, "name": "api", "private": false, "stargazers_count": 3},
        {"id": 2, "name": "web", "private": true, "default_branch": "develop"}
    ]}))
}

async fn create_repository(
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let name = body["name"].clone();
    recorded
        .bodies
        .lock()
        .unwrap()
        .push(("/api/github/repositories".to_string(), body));
    Json(json!({"success": true, "repository": {"id": 42, "name": name}}))
}

async fn projects() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": "Vercel token not configured"})),
    )
}

async fn create_project(
    State(recorded): State<Recorded>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let name = body["name"].clone();
    recorded
        .bodies
        .lock()
        .unwrap()
        .push(("/api/vercel/projects".to_string(), body));
    Json(json!({"project": {"id": "prj_9", "name": name, "updatedAt": "2025-06-01"}}))
}

async fn deploy(Path(id): Path<String>) -> Json<Value> {
    Json(json!({"deployment": {"id": format!("dpl_{}", id), "url": "site.vercel.app", "status": "queued"}}))
}

async fn vercel_status() -> &'static str {
    "not json"
}

pub async fn spawn() -> (SocketAddr, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/status", get(status))
        .route("/health", get(health))
        .route("/api/nvidia/status", get(nvidia))
        .route("/api/github/status", get(github_status))
        .route(
            "/api/github/repositories",
            get(repositories).post(create_repository),
        )
        .route("/api/vercel/status", get(vercel_status))
        .route("/api/vercel/projects", get(projects).post(create_project))
        .route("/api/vercel/projects/{id}/deploy", post(deploy))
        .with_state(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, recorded)
}
