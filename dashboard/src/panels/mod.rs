//! Dashboard panels
//!
//! - [`integration`]: connection status, record list and create form of an
//!   account-backed integration
//! - [`nvidia`]: read-only vendor service and GPU panel

pub mod integration;
pub mod nvidia;

pub use integration::{GithubPanel, IntegrationPanel, VercelPanel};
pub use nvidia::NvidiaPanel;
