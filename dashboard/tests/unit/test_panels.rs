//! Integration panel tests

use std::sync::Arc;
use std::time::Duration;

use dashboard_api::{EnvVar, GpuInfo, NvidiaStatus, ServiceStatus, VendorServices};

use omnidash::errors::DashboardError;
use omnidash::panels::{GithubPanel, NvidiaPanel, VercelPanel};
use omnidash::resource::{EnvField, GithubRepositories, VercelProjects};
use omnidash::state::{NotificationLevel, Notifier};

use crate::support::{connected, project, repository, FakeBackend};

fn github_panel(api: &Arc<FakeBackend>, notifier: &Notifier) -> GithubPanel {
    GithubPanel::new(GithubRepositories::new(api.clone()), notifier.clone())
}

fn vercel_panel(api: &Arc<FakeBackend>, notifier: &Notifier) -> VercelPanel {
    VercelPanel::new(VercelProjects::new(api.clone()), notifier.clone())
}

#[tokio::test]
async fn test_mount_lists_when_connected() {
    let api = Arc::new(FakeBackend::new());
    api.github_status.always(Ok(connected()));
    api.repositories
        .always(Ok(vec![repository(1, "api"), repository(2, "web")]));

    let panel = github_panel(&api, &Notifier::default());
    panel.mount().await.unwrap();

    assert!(panel.connected());
    assert!(!panel.loading());
    let names: Vec<_> = panel.records().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["api", "web"]);
    assert_eq!(api.calls(), ["github_status", "list_repositories"]);
}

#[tokio::test]
async fn test_mount_skips_list_when_not_connected() {
    let api = Arc::new(FakeBackend::new());
    api.vercel_status.always(Ok(Default::default()));

    let panel = vercel_panel(&api, &Notifier::default());
    panel.mount().await.unwrap();

    assert!(!panel.connected());
    assert!(panel.records().is_empty());
    assert_eq!(api.count("list_projects"), 0);
}

#[tokio::test]
async fn test_empty_name_never_issues_request() {
    let api = Arc::new(FakeBackend::new());
    let panel = github_panel(&api, &Notifier::default());

    assert!(!panel.can_submit());
    assert!(matches!(
        panel.submit().await,
        Err(DashboardError::Validation(_))
    ));

    panel.edit_draft(|d| d.name = "   ".to_string());
    assert!(!panel.can_submit());
    assert!(panel.submit().await.is_err());

    assert_eq!(api.count("create_repository"), 0);
}

#[tokio::test]
async fn test_successful_create_prepends_and_resets() {
    let api = Arc::new(FakeBackend::new());
    api.github_status.always(Ok(connected()));
    api.repositories.always(Ok(vec![repository(1, "api")]));
    api.created_repository.push(Ok(repository(9, "demo")));

    let notifier = Notifier::default();
    let mut notifications = notifier.subscribe();
    let panel = github_panel(&api, &notifier);
    panel.mount().await.unwrap();

    panel.edit_draft(|d| {
        d.name = "demo".to_string();
        d.description = "a demo".to_string();
        d.private = true;
        d.framework = "svelte".to_string();
    });
    assert!(panel.can_submit());

    let created = panel.submit().await.unwrap();
    assert_eq!(created.name, "demo");

    let names: Vec<_> = panel.records().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["demo", "api"]);
    assert_eq!(panel.draft(), Default::default());

    let body = &api.repository_bodies()[0];
    assert_eq!(body.name, "demo");
    assert_eq!(body.description, "a demo");
    assert!(body.private);
    assert_eq!(body.framework, "svelte");

    let notification = notifications.recv().await.unwrap();
    assert_eq!(notification.level, NotificationLevel::Success);
}

#[tokio::test]
async fn test_failed_create_keeps_list_and_draft() {
    let api = Arc::new(FakeBackend::new());
    api.vercel_status.always(Ok(connected()));
    api.projects.always(Ok(vec![project("prj_1", "site")]));
    api.created_project.push(Err(500));

    let notifier = Notifier::default();
    let mut notifications = notifier.subscribe();
    let panel = vercel_panel(&api, &notifier);
    panel.mount().await.unwrap();

    panel.edit_draft(|d| d.name = "shop".to_string());
    panel.update_env_var(0, EnvField::Key, "API_URL");
    let before = panel.draft();

    let err = panel.submit().await.unwrap_err();
    assert!(matches!(err, DashboardError::NotOk { status: 500, .. }));

    assert_eq!(panel.draft(), before);
    assert_eq!(panel.records().len(), 1);
    assert!(panel.last_error().is_some());
    assert!(panel.can_submit());

    let notification = notifications.recv().await.unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
}

#[tokio::test]
async fn test_create_with_existing_id_replaces_entry() {
    let api = Arc::new(FakeBackend::new());
    api.github_status.always(Ok(connected()));
    api.repositories
        .always(Ok(vec![repository(1, "api"), repository(2, "web")]));
    api.created_repository.push(Ok(repository(2, "web-v2")));

    let panel = github_panel(&api, &Notifier::default());
    panel.mount().await.unwrap();
    panel.edit_draft(|d| d.name = "web-v2".to_string());
    panel.submit().await.unwrap();

    let names: Vec<_> = panel.records().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["web-v2", "api"]);
}

#[tokio::test]
async fn test_failed_list_keeps_previous_records() {
    let api = Arc::new(FakeBackend::new());
    api.github_status.always(Ok(connected()));
    api.repositories.push(Ok(vec![repository(1, "api")]));
    api.repositories.push(Err(0));

    let panel = github_panel(&api, &Notifier::default());
    panel.mount().await.unwrap();

    assert!(matches!(
        panel.refresh().await,
        Err(DashboardError::Network(_))
    ));
    assert_eq!(panel.records().len(), 1);
    assert!(!panel.loading());
}

#[tokio::test(start_paused = true)]
async fn test_last_issued_refresh_wins() {
    let api = Arc::new(FakeBackend::new());
    api.projects
        .push_delayed(Ok(vec![project("old", "old")]), Duration::from_secs(5));
    api.projects
        .push_delayed(Ok(vec![project("new", "new")]), Duration::from_secs(1));

    let panel = vercel_panel(&api, &Notifier::default());
    let (first, second) = tokio::join!(panel.refresh(), panel.refresh());
    assert!(first.is_ok());
    assert!(second.is_ok());

    let names: Vec<_> = panel.records().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["new"]);
}

#[tokio::test(start_paused = true)]
async fn test_responses_after_unmount_are_dropped() {
    let api = Arc::new(FakeBackend::new());
    api.github_status
        .push_delayed(Ok(connected()), Duration::from_secs(3));
    api.repositories.always(Ok(vec![repository(1, "api")]));

    let panel = Arc::new(github_panel(&api, &Notifier::default()));
    let mounting = tokio::spawn({
        let panel = panel.clone();
        async move { panel.mount().await }
    });

    tokio::time::sleep(Duration::from_secs(1)).await;
    panel.unmount();
    mounting.await.unwrap().unwrap();

    assert!(!panel.is_mounted());
    assert!(panel.connection().is_none());
    assert!(panel.records().is_empty());
    assert_eq!(api.count("list_repositories"), 0);
}

#[tokio::test]
async fn test_vercel_deploy_refreshes_list() {
    let api = Arc::new(FakeBackend::new());
    api.deployment.push(Ok(dashboard_api::DeploymentInfo {
        id: "dpl_1".to_string(),
        url: Some("site-abc.vercel.app".to_string()),
        status: Some("queued".to_string()),
    }));
    let mut live = project("prj_1", "site");
    live.url = Some("site.vercel.app".to_string());
    api.projects.always(Ok(vec![live]));

    let panel = vercel_panel(&api, &Notifier::default());
    let deployment = panel.deploy("prj_1").await.unwrap();

    assert_eq!(deployment.id, "dpl_1");
    assert_eq!(api.calls(), ["deploy_project:prj_1", "list_projects"]);
    assert!(panel.records()[0].is_live());
}

#[tokio::test]
async fn test_vercel_env_rows_are_posted() {
    let api = Arc::new(FakeBackend::new());
    api.created_project.push(Ok(project("prj_2", "shop")));

    let panel = vercel_panel(&api, &Notifier::default());
    panel.edit_draft(|d| {
        d.name = "shop".to_string();
        d.git_repo = "https://github.com/acme/shop".to_string();
    });
    panel.update_env_var(0, EnvField::Key, "A");
    panel.update_env_var(0, EnvField::Value, "1");
    panel.add_env_var();
    panel.add_env_var();
    assert_eq!(panel.remove_env_var(2), Some(EnvVar::default()));

    panel.submit().await.unwrap();

    let body = &api.project_bodies()[0];
    assert_eq!(body.git_repo, "https://github.com/acme/shop");
    assert_eq!(body.environment_vars, vec![EnvVar::new("A", "1"), EnvVar::default()]);
    assert_eq!(panel.draft().environment_vars, vec![EnvVar::default()]);
}

#[tokio::test]
async fn test_nvidia_panel() {
    let api = Arc::new(FakeBackend::new());
    api.nvidia.push(Ok(NvidiaStatus {
        gpu_available: true,
        gpu_info: Some(GpuInfo {
            name: Some("RTX 4090".to_string()),
            memory: None,
        }),
        services: VendorServices {
            gfn: ServiceStatus::Ready,
            ..Default::default()
        },
    }));
    api.nvidia.push(Err(503));

    let panel = NvidiaPanel::new(api.clone(), Notifier::default());
    assert!(panel.gpu_summary().is_none());
    assert_eq!(panel.service_rows().len(), 3);

    panel.refresh().await.unwrap();
    let gpu = panel.gpu_summary().unwrap();
    assert_eq!(gpu.availability.label, "Available");
    assert_eq!(gpu.name, "RTX 4090");
    assert_eq!(gpu.memory, "N/A");

    let rows = panel.service_rows();
    assert_eq!(rows[0].badge.label, "Ready");
    assert_eq!(rows[1].badge.label, "Not Configured");

    assert!(panel.refresh().await.is_err());
    assert!(panel.gpu_summary().is_some());
    assert!(panel.last_error().is_some());
}
