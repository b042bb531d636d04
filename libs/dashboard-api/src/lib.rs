//! Wire models for the OmniAI platform backend
//!
//! Request and response shapes for the REST endpoints the dashboard
//! consumes. Every response type tolerates missing fields so a partially
//! populated reply still renders.

pub mod models;

pub use models::*;
