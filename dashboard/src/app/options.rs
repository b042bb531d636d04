//! Application configuration options

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::http::client::DEFAULT_REQUEST_TIMEOUT;
use crate::storage::settings::Settings;
use crate::workers::poller;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub lifecycle: LifecycleOptions,

    /// Backend API base URL
    pub backend_base_url: String,

    /// Timeout applied to every backend request
    pub request_timeout: Duration,

    pub poller: poller::Options,

    /// Enable the local status server
    pub enable_server: bool,

    pub server: ServerOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            lifecycle: LifecycleOptions::default(),
            backend_base_url: "http://localhost:5000".to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poller: poller::Options::default(),
            enable_server: false,
            server: ServerOptions::default(),
        }
    }
}

impl AppOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            lifecycle: LifecycleOptions::default(),
            backend_base_url: settings.backend.base_url.clone(),
            request_timeout: settings.backend.request_timeout(),
            poller: poller::Options {
                interval: settings.poll_interval(),
            },
            enable_server: settings.server.enable,
            server: ServerOptions {
                host: settings.server.host,
                port: settings.server.port,
            },
        }
    }
}

/// Lifecycle options
#[derive(Debug, Clone)]
pub struct LifecycleOptions {
    /// Maximum delay for graceful shutdown
    pub max_shutdown_delay: Duration,
}

impl Default for LifecycleOptions {
    fn default() -> Self {
        Self {
            max_shutdown_delay: Duration::from_secs(10),
        }
    }
}

/// Local HTTP server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub host: IpAddr,

    /// Port to listen on, 0 picks a free one
    pub port: u16,
}

impl ServerOptions {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8787,
        }
    }
}
