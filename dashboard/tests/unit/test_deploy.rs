//! Deployment step tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashboard_api::EnvVar;
use tokio::time::Instant;

use omnidash::deploy::{
    step_at, DeploymentCenter, DeploymentRun, DeploymentStep, QuickDeployPreset, StepStatus,
};
use omnidash::errors::DashboardError;
use omnidash::resource::{EnvVarRows, VercelProjects};
use omnidash::state::Notifier;

use crate::support::{project, FakeBackend};

#[tokio::test(start_paused = true)]
async fn test_steps_advance_on_schedule() {
    let started = Instant::now();
    let run = DeploymentRun::start(tokio::time::sleep);
    let mut rx = run.subscribe();

    assert_eq!(run.current(), Some(DeploymentStep::Github));

    let mut seen = Vec::new();
    while rx.changed().await.is_ok() {
        let step = rx.borrow_and_update().unwrap();
        seen.push((step, started.elapsed()));
        if step == DeploymentStep::Complete {
            break;
        }
    }

    assert_eq!(
        seen,
        [
            (DeploymentStep::Configure, Duration::from_secs(2)),
            (DeploymentStep::Deploy, Duration::from_secs(4)),
            (DeploymentStep::Complete, Duration::from_secs(6)),
        ]
    );
    for (step, at) in seen {
        assert_eq!(step_at(at), step);
    }
}

#[tokio::test]
async fn test_sleeps_are_chained_two_seconds_apart() {
    let sleeps = Arc::new(Mutex::new(Vec::new()));
    let recorder = sleeps.clone();
    let run = DeploymentRun::start(move |wait| {
        recorder.lock().unwrap().push(wait);
        async {}
    });

    let mut rx = run.subscribe();
    rx.wait_for(|step| *step == Some(DeploymentStep::Complete))
        .await
        .unwrap();

    assert_eq!(*sleeps.lock().unwrap(), vec![Duration::from_secs(2); 3]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_updates() {
    let run = DeploymentRun::start(tokio::time::sleep);

    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(run.current(), Some(DeploymentStep::Configure));

    run.cancel();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(run.current(), Some(DeploymentStep::Configure));
    assert!(run.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_run_stops_updates() {
    let run = DeploymentRun::start(tokio::time::sleep);
    let rx = run.subscribe();
    drop(run);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(*rx.borrow(), Some(DeploymentStep::Github));
}

fn center(api: &Arc<FakeBackend>) -> DeploymentCenter {
    DeploymentCenter::new(VercelProjects::new(api.clone()), Notifier::default())
}

#[tokio::test(start_paused = true)]
async fn test_center_requires_project_name() {
    let api = Arc::new(FakeBackend::new());
    let mut center = center(&api);

    assert!(!center.can_start());
    assert!(matches!(
        center.start(tokio::time::sleep),
        Err(DashboardError::Validation(_))
    ));
    assert_eq!(center.current_step(), None);
    assert!(center
        .steps()
        .iter()
        .all(|(_, status)| *status == StepStatus::Pending));
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_previous_run() {
    let api = Arc::new(FakeBackend::new());
    let mut center = center(&api);
    center.draft_mut().project_name = "shop".to_string();

    let first = center.start(tokio::time::sleep).unwrap();
    tokio::time::sleep(Duration::from_millis(4500)).await;
    assert_eq!(center.current_step(), Some(DeploymentStep::Deploy));

    center.start(tokio::time::sleep).unwrap();
    assert_eq!(center.current_step(), Some(DeploymentStep::Github));

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(*first.borrow(), Some(DeploymentStep::Deploy));
    assert_eq!(center.current_step(), Some(DeploymentStep::Configure));

    let steps = center.steps();
    assert_eq!(steps[0].1, StepStatus::Completed);
    assert_eq!(steps[1].1, StepStatus::Active);
    assert_eq!(steps[3].1, StepStatus::Pending);
}

#[test]
fn test_presets_fill_build_settings() {
    let python = QuickDeployPreset::find("python").unwrap();
    let mut center = center(&Arc::new(FakeBackend::new()));
    center.draft_mut().project_name = "api".to_string();
    center.apply_preset(python);

    let draft = center.draft();
    assert_eq!(draft.project_name, "api");
    assert_eq!(draft.framework, "python");
    assert_eq!(draft.build_command, "pip install -r requirements.txt");
    assert_eq!(draft.output_directory, "");

    assert_eq!(QuickDeployPreset::find("Next.js"), None);
    assert_eq!(
        QuickDeployPreset::find("NEXTJS").map(|p| p.output_directory),
        Some(".next")
    );
}

#[tokio::test]
async fn test_create_project_resets_only_on_success() {
    let api = Arc::new(FakeBackend::new());
    api.created_project.push(Err(422));
    api.created_project.push(Ok(project("prj_7", "shop")));

    let mut center = center(&api);
    {
        let draft = center.draft_mut();
        draft.project_name = " shop ".to_string();
        draft.repository = "https://github.com/acme/shop".to_string();
        draft.add_env_var();
        draft.add_env_var();
        draft.environment_vars[1] = EnvVar::new("TOKEN", "x");
    }

    assert!(center.create_project().await.is_err());
    assert_eq!(center.draft().project_name, " shop ");

    let created = center.create_project().await.unwrap();
    assert_eq!(created.name, "shop");
    assert_eq!(center.draft().project_name, "");

    let body = &api.project_bodies()[1];
    assert_eq!(body.name, "shop");
    assert_eq!(body.git_repo, "https://github.com/acme/shop");
    assert_eq!(body.environment_vars, vec![EnvVar::new("TOKEN", "x")]);
}
