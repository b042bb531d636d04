//! Application runtime

pub mod options;
pub mod run;
pub mod state;

pub use options::{AppOptions, LifecycleOptions, ServerOptions};
pub use run::{run, run_with_state};
pub use state::AppState;
