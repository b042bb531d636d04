//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::app::options::{AppOptions, LifecycleOptions};
use crate::app::state::AppState;
use crate::errors::DashboardError;
use crate::server::serve::serve;
use crate::server::state::ServerState;
use crate::state::StatusWriter;
use crate::workers::{poller, status_log};

/// Run the dashboard until the shutdown signal fires
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DashboardError> {
    info!("Initializing dashboard against {}", options.backend_base_url);

    let (app_state, writer) = AppState::init(&options.backend_base_url, options.request_timeout)?;
    run_with_state(options, app_state, writer, shutdown_signal).await
}

/// Run the dashboard over an already built state.
///
/// `writer` must be the writer of `app_state.status`; it moves into the poller.
pub async fn run_with_state(
    options: AppOptions,
    app_state: AppState,
    writer: StatusWriter,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), DashboardError> {
    let (shutdown_tx, _shutdown_rx): (broadcast::Sender<()>, _) = broadcast::channel(1);
    let mut shutdown_manager = ShutdownManager::new(shutdown_tx.clone(), options.lifecycle.clone());

    let app_state = Arc::new(app_state);
    if let Err(e) = init(&options, app_state, writer, &shutdown_tx, &mut shutdown_manager).await {
        error!("Failed to start dashboard: {}", e);
        shutdown_manager.shutdown().await?;
        return Err(e);
    }

    shutdown_signal.await;
    info!("Shutdown signal received, shutting down...");

    drop(shutdown_tx);
    shutdown_manager.shutdown().await
}

// =============================== INITIALIZATION ================================== //

async fn init(
    options: &AppOptions,
    app_state: Arc<AppState>,
    writer: StatusWriter,
    shutdown_tx: &broadcast::Sender<()>,
    shutdown_manager: &mut ShutdownManager,
) -> Result<(), DashboardError> {
    init_status_logger(app_state.clone(), shutdown_manager, shutdown_tx.subscribe())?;

    init_poller_worker(
        options.poller.clone(),
        app_state.clone(),
        writer,
        shutdown_manager,
        shutdown_tx.subscribe(),
    )?;

    if options.enable_server {
        init_server(options, app_state, shutdown_manager, shutdown_tx.subscribe()).await?;
    }

    Ok(())
}

fn init_poller_worker(
    options: poller::Options,
    app_state: Arc<AppState>,
    writer: StatusWriter,
    shutdown_manager: &mut ShutdownManager,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), DashboardError> {
    info!("Initializing poller worker...");

    let api = app_state.api.clone();
    let notifier = app_state.notifier.clone();

    let poller_handle = tokio::spawn(async move {
        poller::run(
            &options,
            api,
            writer,
            notifier,
            tokio::time::sleep,
            Box::pin(async move {
                let _ = shutdown_rx.recv().await;
            }),
        )
        .await;
    });

    shutdown_manager.with_poller_worker_handle(poller_handle)
}

fn init_status_logger(
    app_state: Arc<AppState>,
    shutdown_manager: &mut ShutdownManager,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), DashboardError> {
    let view = app_state.status.clone();
    let notifications = app_state.notifier.subscribe();

    let handle = tokio::spawn(async move {
        let activity = status_log::run(
            view,
            notifications,
            Box::pin(async move {
                let _ = shutdown_rx.recv().await;
            }),
        )
        .await;
        debug!("Status logger stopped: {:?}", activity);
    });

    shutdown_manager.with_status_logger_handle(handle)
}

async fn init_server(
    options: &AppOptions,
    app_state: Arc<AppState>,
    shutdown_manager: &mut ShutdownManager,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), DashboardError> {
    info!("Initializing local HTTP server...");

    let server_state = ServerState::new(app_state.status.clone());

    let (_addr, server_handle) = serve(&options.server, Arc::new(server_state), async move {
        let _ = shutdown_rx.recv().await;
    })
    .await?;

    shutdown_manager.with_server_handle(server_handle)
}

// ================================= SHUTDOWN ===================================== //

struct ShutdownManager {
    shutdown_tx: broadcast::Sender<()>,
    lifecycle_options: LifecycleOptions,
    server_handle: Option<JoinHandle<Result<(), DashboardError>>>,
    poller_worker_handle: Option<JoinHandle<()>>,
    status_logger_handle: Option<JoinHandle<()>>,
}

impl ShutdownManager {
    fn new(shutdown_tx: broadcast::Sender<()>, lifecycle_options: LifecycleOptions) -> Self {
        Self {
            shutdown_tx,
            lifecycle_options,
            server_handle: None,
            poller_worker_handle: None,
            status_logger_handle: None,
        }
    }

    fn with_poller_worker_handle(&mut self, handle: JoinHandle<()>) -> Result<(), DashboardError> {
        if self.poller_worker_handle.is_some() {
            return Err(DashboardError::ShutdownError("poller_handle already set".to_string()));
        }
        self.poller_worker_handle = Some(handle);
        Ok(())
    }

    fn with_status_logger_handle(&mut self, handle: JoinHandle<()>) -> Result<(), DashboardError> {
        if self.status_logger_handle.is_some() {
            return Err(DashboardError::ShutdownError(
                "status_logger_handle already set".to_string(),
            ));
        }
        self.status_logger_handle = Some(handle);
        Ok(())
    }

    fn with_server_handle(
        &mut self,
        handle: JoinHandle<Result<(), DashboardError>>,
    ) -> Result<(), DashboardError> {
        if self.server_handle.is_some() {
            return Err(DashboardError::ShutdownError("server_handle already set".to_string()));
        }
        self.server_handle = Some(handle);
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<(), DashboardError> {
        let _ = self.shutdown_tx.send(());

        let max_delay = self.lifecycle_options.max_shutdown_delay;
        let result = tokio::time::timeout(max_delay, self.shutdown_impl()).await;
        match result {
            Ok(result) => result,
            Err(_) => {
                error!("Shutdown timed out after {:?}, aborting tasks...", max_delay);
                self.abort_all();
                Err(DashboardError::ShutdownError(format!(
                    "timed out after {:?}",
                    max_delay
                )))
            }
        }
    }

    async fn shutdown_impl(&mut self) -> Result<(), DashboardError> {
        info!("Shutting down dashboard...");

        // 1. Poller, so nothing is written to the store anymore
        if let Some(handle) = self.poller_worker_handle.take() {
            handle.await.map_err(|e| DashboardError::ShutdownError(e.to_string()))?;
        }

        // 2. Status logger
        if let Some(handle) = self.status_logger_handle.take() {
            handle.await.map_err(|e| DashboardError::ShutdownError(e.to_string()))?;
        }

        // 3. Local server
        if let Some(handle) = self.server_handle.take() {
            handle.await.map_err(|e| DashboardError::ShutdownError(e.to_string()))??;
        }

        info!("Shutdown complete");
        Ok(())
    }

    fn abort_all(&mut self) {
        for handle in [self.poller_worker_handle.take(), self.status_logger_handle.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
        if let Some(handle) = self.server_handle.take() {
            handle.abort();
        }
    }
}

// ================================= SIGNALS ====================================== //

/// Resolves on Ctrl+C, or SIGTERM on unix
pub async fn await_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {
                        info!("SIGTERM received, shutting down...");
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("Ctrl+C received, shutting down...");
                    }
                }
                return;
            }
            Err(e) => {
                error!("Unable to listen for SIGTERM: {}", e);
            }
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received, shutting down...");
}
