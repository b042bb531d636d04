//! Backend REST API access

pub mod api;
pub mod client;
mod github;
mod nvidia;
mod platform;
mod vercel;

pub use api::BackendApi;
pub use client::HttpClient;
