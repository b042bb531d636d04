//! Application runtime lifecycle tests

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use dashboard_api::{HealthSummary, PlatformStatus};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use omnidash::app::{run_with_state, AppOptions, AppState, ServerOptions};
use omnidash::errors::DashboardError;
use omnidash::state::StatusView;
use omnidash::workers::poller;

use crate::support::FakeBackend;

const PROMPTLY: Duration = Duration::from_secs(5);

fn online() -> PlatformStatus {
    PlatformStatus {
        backend: true,
        middleware: true,
        github: true,
        ..Default::default()
    }
}

fn options(enable_server: bool, port: u16) -> AppOptions {
    AppOptions {
        poller: poller::Options {
            interval: Duration::from_millis(50),
        },
        enable_server,
        server: ServerOptions {
            host: IpAddr::from([127, 0, 0, 1]),
            port,
        },
        ..Default::default()
    }
}

async fn wait_online(view: &mut StatusView) {
    tokio::time::timeout(PROMPTLY, async {
        while !view.is_online() {
            view.changed().await.unwrap();
        }
    })
    .await
    .unwrap();
}

async fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn test_run_polls_until_shutdown() {
    let api = Arc::new(FakeBackend::new());
    api.platform.always(Ok(online()));
    api.health.always(Ok(HealthSummary::default()));

    let (state, writer) = AppState::with_api(api.clone());
    let mut view = state.status.clone();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(run_with_state(options(false, 0), state, writer, async move {
        let _ = rx.await;
    }));

    wait_online(&mut view).await;

    tx.send(()).unwrap();
    let result = tokio::time::timeout(PROMPTLY, handle).await.unwrap().unwrap();
    assert!(result.is_ok());

    // The poller owned the only writer
    let drained = tokio::time::timeout(PROMPTLY, async {
        while view.changed().await.is_ok() {}
    })
    .await;
    assert!(drained.is_ok());
    let polls = api.count("platform_status");
    assert!(polls >= 1);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(api.count("platform_status"), polls);
}

#[tokio::test]
async fn test_shutdown_does_not_wait_for_in_flight_poll() {
    let api = Arc::new(FakeBackend::new());
    api.platform.push_delayed(Ok(online()), Duration::from_secs(3600));
    api.health.always(Ok(HealthSummary::default()));

    let (state, writer) = AppState::with_api(api.clone());
    let view = state.status.clone();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(run_with_state(options(false, 0), state, writer, async move {
        let _ = rx.await;
    }));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(api.count("platform_status"), 1);

    tx.send(()).unwrap();
    let result = tokio::time::timeout(PROMPTLY, handle).await.unwrap().unwrap();
    assert!(result.is_ok());
    assert!(view.snapshot().platform.is_none());
}

#[tokio::test]
async fn test_run_serves_dashboard_while_running() {
    let api = Arc::new(FakeBackend::new());
    api.platform.always(Ok(online()));
    api.health.always(Ok(HealthSummary {
        status: "healthy".to_string(),
        ..Default::default()
    }));

    let port = free_port().await;
    let (state, writer) = AppState::with_api(api.clone());
    let mut view = state.status.clone();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(run_with_state(options(true, port), state, writer, async move {
        let _ = rx.await;
    }));

    wait_online(&mut view).await;

    let url = format!("http://{}/dashboard", SocketAddr::from(([127, 0, 0, 1], port)));
    let client = reqwest::Client::new();
    let mut body = None;
    for _ in 0..50 {
        if let Ok(response) = client.get(&url).send().await {
            assert!(response.status().is_success());
            body = Some(response.json::<serde_json::Value>().await.unwrap());
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let body = body.expect("dashboard should be reachable");
    assert_eq!(body["overview"]["online"], true);
    assert_eq!(body["snapshot"]["platform"]["github"], true);
    drop(client);

    tx.send(()).unwrap();
    let result = tokio::time::timeout(PROMPTLY, handle).await.unwrap().unwrap();
    assert!(result.is_ok());

    let refused = reqwest::Client::new().get(&url).send().await;
    assert!(refused.is_err());
}

#[tokio::test]
async fn test_server_bind_failure_stops_runtime() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = taken.local_addr().unwrap().port();

    let api = Arc::new(FakeBackend::new());
    api.platform.always(Ok(online()));
    api.health.always(Ok(HealthSummary::default()));
    let (state, writer) = AppState::with_api(api);

    let result = tokio::time::timeout(
        PROMPTLY,
        run_with_state(options(true, port), state, writer, std::future::pending::<()>()),
    )
    .await
    .unwrap();
    assert!(matches!(result, Err(DashboardError::ServerError(_))));
}
