//! HttpClient against a loopback backend

use dashboard_api::{RepositoryDraft, ServiceStatus};
use tokio_test::{assert_err, assert_ok};

use omnidash::errors::DashboardError;
use omnidash::http::client::DEFAULT_REQUEST_TIMEOUT;
use omnidash::http::{BackendApi, HttpClient};

use crate::fake_backend;

async fn client() -> (HttpClient, fake_backend::Recorded) {
    let (addr, recorded) = fake_backend::spawn().await;
    let client = HttpClient::new(&format!("http://{}/", addr), DEFAULT_REQUEST_TIMEOUT).unwrap();
    (client, recorded)
}

#[tokio::test]
async fn test_platform_status_and_health() {
    let (client, _) = client().await;

    let status = assert_ok!(client.platform_status().await);
    assert!(status.is_online());
    assert!(status.github);
    assert!(!status.vercel);

    let health = assert_ok!(client.health().await);
    assert_eq!(health.status, "healthy");
    assert_eq!(
        health.services.get("nvidia_sdks").map(String::as_str),
        Some("checking")
    );
    assert!(health.extra.contains_key("version"));
}

#[tokio::test]
async fn test_nvidia_status() {
    let (client, _) = client().await;

    let status = assert_ok!(client.nvidia_status().await);
    assert!(status.gpu_available);
    assert_eq!(status.services.gfn, ServiceStatus::Ready);
    assert_eq!(status.services.cloudxr, ServiceStatus::NotConfigured);
    assert_eq!(
        status.gpu_info.and_then(|g| g.memory_text()).as_deref(),
        Some("24576")
    );
}

#[tokio::test]
async fn test_repositories_round_trip() {
    let (client, recorded) = client().await;

    let github = assert_ok!(client.github_status().await);
    assert!(!github.connected);
    assert_eq!(github.error.as_deref(), Some("GitHub token not configured"));

    let repos = assert_ok!(client.list_repositories().await);
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[1].branch(), "develop");
    assert_eq!(repos[0].stars(), 3);

    let draft = RepositoryDraft {
        name: "demo".to_string(),
        private: true,
        ..Default::default()
    };
    let created = assert_ok!(client.create_repository(&draft).await);
    assert_eq!(created.id.as_str(), "42");
    assert_eq!(created.name, "demo");

    let bodies = recorded.bodies();
    assert_eq!(bodies[0].0, "/api/github/repositories");
    assert_eq!(
        bodies[0].1,
        serde_json::json!({
            "name": "demo",
            "description": "",
            "private": true,
            "framework": "nextjs"
        })
    );
}

#[tokio::test]
async fn test_create_project_uses_camel_case() {
    let (client, recorded) = client().await;

    let draft = dashboard_api::ProjectDraft {
        name: "site".to_string(),
        git_repo: "https://github.com/acme/site".to_string(),
        ..Default::default()
    };
    let project = assert_ok!(client.create_project(&draft).await);
    assert_eq!(project.id.as_str(), "prj_9");
    assert_eq!(project.updated_at.as_deref(), Some("2025-06-01"));

    let body = &recorded.bodies()[0].1;
    assert_eq!(body["gitRepo"], "https://github.com/acme/site");
    assert!(body["environmentVars"].is_array());
}

#[tokio::test]
async fn test_deploy_project() {
    let (client, _) = client().await;

    let deployment = assert_ok!(client.deploy_project("prj_9").await);
    assert_eq!(deployment.id, "dpl_prj_9");
    assert_eq!(deployment.status.as_deref(), Some("queued"));
}

#[tokio::test]
async fn test_deploy_project_id_stays_one_segment() {
    let (client, _) = client().await;

    for id in ["team/prj", "prj?x=1", "prj#frag"] {
        let deployment = assert_ok!(client.deploy_project(id).await);
        assert_eq!(deployment.id, format!("dpl_{}", id));
    }

    for id in ["", "..", "."] {
        let err = assert_err!(client.deploy_project(id).await);
        assert!(matches!(err, DashboardError::Validation(_)));
    }
}

#[tokio::test]
async fn test_error_status_uses_detail() {
    let (client, _) = client().await;

    let err = assert_err!(client.list_projects().await);
    match err {
        DashboardError::NotOk { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Vercel token not configured");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (client, _) = client().await;

    let err = assert_err!(client.vercel_status().await);
    assert!(matches!(err, DashboardError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(&format!("http://{}", addr), DEFAULT_REQUEST_TIMEOUT).unwrap();
    let err = assert_err!(client.platform_status().await);
    assert!(matches!(err, DashboardError::Network(_)));
    assert!(err.is_request_failure());
}
