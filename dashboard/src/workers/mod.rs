//! Background workers

pub mod poller;
pub mod status_log;
