//! Integration panel

use std::sync::{Mutex, MutexGuard};

use dashboard_api::{ConnectionStatus, DeploymentInfo, EnvVar};
use tracing::{debug, info, warn};

use crate::errors::DashboardError;
use crate::resource::{
    Draft, EnvField, EnvVarRows, GithubRepositories, Identified, RecordList, RemoteResource,
    VercelProjects,
};
use crate::state::{Lifetime, Notifier, Slot};

pub type GithubPanel = IntegrationPanel<GithubRepositories>;
pub type VercelPanel = IntegrationPanel<VercelProjects>;

struct PanelState<R: RemoteResource> {
    connection: Option<ConnectionStatus>,
    records: RecordList<R::Record>,
    draft: R::Draft,
    loading: bool,
    submitting: bool,
    last_error: Option<String>,
}

impl<R: RemoteResource> Default for PanelState<R> {
    fn default() -> Self {
        Self {
            connection: None,
            records: RecordList::new(),
            draft: R::Draft::default(),
            loading: false,
            submitting: false,
            last_error: None,
        }
    }
}

/// Connection status, record list and create form of one integration.
///
/// Methods take `&self` so the panel can be shared behind an `Arc`. The state
/// lock is never held across an await; responses are applied only while the
/// ticket they were issued under is still current.
pub struct IntegrationPanel<R: RemoteResource> {
    resource: R,
    notifier: Notifier,
    lifetime: Lifetime,
    state: Mutex<PanelState<R>>,
}

impl<R: RemoteResource> IntegrationPanel<R> {
    pub fn new(resource: R, notifier: Notifier) -> Self {
        Self {
            resource,
            notifier,
            lifetime: Lifetime::new(),
            state: Mutex::new(PanelState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, PanelState<R>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record, log and broadcast a failure, then hand the error back
    fn fail<T>(&self, title: String, err: DashboardError) -> Result<T, DashboardError> {
        warn!("{}: {}", title, err);
        self.state().last_error = Some(err.to_string());
        self.notifier.failure(title, &err);
        Err(err)
    }

    /// Check the connection and, when connected, load the record list
    pub async fn mount(&self) -> Result<(), DashboardError> {
        let ticket = self.lifetime.ticket(Slot::Status);
        self.state().loading = true;

        let result = self.resource.status().await;
        if !self.lifetime.is_current(&ticket) {
            debug!("Dropping stale {} status response", R::NAME);
            return Ok(());
        }
        self.state().loading = false;

        match result {
            Ok(status) => {
                let connected = status.connected;
                self.state().connection = Some(status);
                if connected {
                    self.refresh().await
                } else {
                    info!("{} is not connected", R::NAME);
                    Ok(())
                }
            }
            Err(e) => self.fail(format!("{} status check failed", R::NAME), e),
        }
    }

    /// Reload the record list
    pub async fn refresh(&self) -> Result<(), DashboardError> {
        let ticket = self.lifetime.ticket(Slot::List);
        self.state().loading = true;

        let result = self.resource.list().await;
        if !self.lifetime.is_current(&ticket) {
            debug!("Dropping stale {} list response", R::NAME);
            return Ok(());
        }

        let mut state = self.state();
        state.loading = false;
        match result {
            Ok(records) => {
                debug!("Loaded {} {} records", records.len(), R::NAME);
                state.records.replace_all(records);
                state.last_error = None;
                Ok(())
            }
            Err(e) => {
                drop(state);
                self.fail(format!("Failed to load {} {}s", R::NAME, R::RECORD), e)
            }
        }
    }

    /// Whether the submit action is enabled
    pub fn can_submit(&self) -> bool {
        let state = self.state();
        state.draft.is_submittable() && !state.submitting
    }

    /// Post the current draft.
    ///
    /// On success the created record goes to the front of the list and the
    /// draft is reset. On failure neither is touched.
    pub async fn submit(&self) -> Result<R::Record, DashboardError> {
        let draft = {
            let mut state = self.state();
            if !state.draft.is_submittable() {
                return Err(DashboardError::Validation(format!(
                    "{} name is required",
                    R::RECORD
                )));
            }
            if state.submitting {
                return Err(DashboardError::Validation(format!(
                    "a {} is already being created",
                    R::RECORD
                )));
            }
            state.submitting = true;
            state.draft.clone()
        };

        let ticket = self.lifetime.guard();
        let result = self.resource.create(&draft).await;
        if !self.lifetime.is_current(&ticket) {
            debug!("Panel unmounted, not applying {} create response", R::NAME);
            return result;
        }

        self.state().submitting = false;
        match result {
            Ok(record) => {
                {
                    let mut state = self.state();
                    state.records.prepend(record.clone());
                    state.draft.reset();
                    state.last_error = None;
                }
                info!("Created {} {} '{}'", R::NAME, R::RECORD, record.name());
                self.notifier.success(
                    format!("{} {} created", R::NAME, R::RECORD),
                    record.name().to_string(),
                );
                Ok(record)
            }
            Err(e) => self.fail(format!("Failed to create {} {}", R::NAME, R::RECORD), e),
        }
    }

    /// Edit the draft in place
    pub fn edit_draft<T>(&self, edit: impl FnOnce(&mut R::Draft) -> T) -> T {
        edit(&mut self.state().draft)
    }

    pub fn draft(&self) -> R::Draft {
        self.state().draft.clone()
    }

    pub fn records(&self) -> Vec<R::Record> {
        self.state().records.to_vec()
    }

    pub fn connection(&self) -> Option<ConnectionStatus> {
        self.state().connection.clone()
    }

    pub fn connected(&self) -> bool {
        self.state()
            .connection
            .as_ref()
            .is_some_and(|c| c.connected)
    }

    pub fn loading(&self) -> bool {
        let state = self.state();
        state.loading || state.submitting
    }

    pub fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifetime.is_mounted()
    }

    /// Responses arriving after this are discarded
    pub fn unmount(&self) {
        debug!("Unmounting {} panel", R::NAME);
        self.lifetime.unmount();
    }
}

impl IntegrationPanel<VercelProjects> {
    /// Trigger a deployment of an existing project, then reload the list
    pub async fn deploy(&self, project_id: &str) -> Result<DeploymentInfo, DashboardError> {
        let ticket = self.lifetime.guard();
        self.state().loading = true;

        let result = self.resource.deploy(project_id).await;
        if !self.lifetime.is_current(&ticket) {
            return result;
        }
        self.state().loading = false;

        match result {
            Ok(deployment) => {
                info!("Deployment {} started for project {}", deployment.id, project_id);
                self.notifier
                    .success("Deployment started", format!("project {}", project_id));
                // a failed reload is already reported by refresh
                let _ = self.refresh().await;
                Ok(deployment)
            }
            Err(e) => self.fail(format!("Failed to deploy project {}", project_id), e),
        }
    }

    pub fn add_env_var(&self) {
        self.edit_draft(|draft| draft.add_env_var());
    }

    pub fn update_env_var(&self, index: usize, field: EnvField, value: impl Into<String>) -> bool {
        self.edit_draft(|draft| draft.update_env_var(index, field, value))
    }

    pub fn remove_env_var(&self, index: usize) -> Option<EnvVar> {
        self.edit_draft(|draft| draft.remove_env_var(index))
    }
}
