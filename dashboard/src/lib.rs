//! OmniAI platform dashboard
//!
//! Headless client for the OmniAI backend: polls platform status, renders
//! status badges, drives the integration forms and simulates deployments.

pub mod app;
pub mod cli;
pub mod deploy;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod panels;
pub mod render;
pub mod resource;
pub mod server;
pub mod state;
pub mod storage;
pub mod utils;
pub mod workers;
