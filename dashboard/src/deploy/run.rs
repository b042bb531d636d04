//! Timed deployment runs

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::deploy::steps::DeploymentStep;

/// A running walk through the deployment steps.
///
/// The first step is shown immediately; each later step follows the previous
/// one after [`DeploymentStep::INTERVAL`]. Dropping the run cancels it.
#[derive(Debug)]
pub struct DeploymentRun {
    rx: watch::Receiver<Option<DeploymentStep>>,
    handle: JoinHandle<()>,
}

impl DeploymentRun {
    /// Spawn a run on the current tokio runtime
    pub fn start<S, F>(sleep_fn: S) -> Self
    where
        S: Fn(Duration) -> F + Send + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let (tx, rx) = watch::channel(Some(DeploymentStep::Github));

        let handle = tokio::spawn(async move {
            info!("Deployment started");
            let mut step = DeploymentStep::Github;
            while let Some(next) = step.next() {
                sleep_fn(DeploymentStep::INTERVAL).await;
                step = next;
                debug!("Deployment step: {}", step);
                if tx.send(Some(step)).is_err() {
                    return;
                }
            }
            info!("Deployment complete");
        });

        Self { rx, handle }
    }

    pub fn current(&self) -> Option<DeploymentStep> {
        *self.rx.borrow()
    }

    /// Receiver that observes every step change
    pub fn subscribe(&self) -> watch::Receiver<Option<DeploymentStep>> {
        self.rx.clone()
    }

    /// Stop the run; the current step stays where it is
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Cancelling deployment run");
            self.handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DeploymentRun {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
