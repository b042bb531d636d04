//! HTTP server setup

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::DashboardError;
use crate::server::handlers::{dashboard_handler, health_handler, version_handler};
use crate::server::state::ServerState;

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .route("/dashboard", get(dashboard_handler))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server, returning the bound address and its task
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(SocketAddr, JoinHandle<Result<(), DashboardError>>), DashboardError> {
    let app = router(state);

    let listener = TcpListener::bind(options.addr())
        .await
        .map_err(|e| DashboardError::ServerError(e.to_string()))?;
    let addr = listener
        .local_addr()
        .map_err(|e| DashboardError::ServerError(e.to_string()))?;
    info!("Starting HTTP server on {}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| DashboardError::ServerError(e.to_string()))
    });

    Ok((addr, handle))
}
