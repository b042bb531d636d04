//! HTTP client implementation

use std::time::Duration;

use dashboard_api::ErrorResponse;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::errors::DashboardError;

/// Default timeout applied to every backend request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for backend communication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DashboardError> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DashboardError::ConfigError(format!(
                "unsupported scheme in backend URL: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::ConfigError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build an absolute path from segments, percent-encoding each one.
    ///
    /// Empty, `.` and `..` segments are rejected so a caller supplied id can
    /// never change which resource is addressed.
    pub fn segment_path(segments: &[&str]) -> Result<String, DashboardError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.trim().is_empty() || **s == "." || **s == "..")
        {
            return Err(DashboardError::Validation(format!(
                "invalid path segment: {:?}",
                bad
            )));
        }

        let mut url = Url::parse("http://localhost/")?;
        url.path_segments_mut()
            .map_err(|_| DashboardError::ConfigError("cannot build request path".to_string()))?
            .clear()
            .extend(segments);
        Ok(url.path().to_string())
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Self::decode("GET", response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, DashboardError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Self::decode("POST", response).await
    }

    /// Make a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        Self::decode("POST", response).await
    }

    async fn decode<T: DeserializeOwned>(
        method: &str,
        response: Response,
    ) -> Result<T, DashboardError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!("HTTP {} failed: {} - {}", method, status, text);
            let body = serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.message().map(str::to_string))
                .unwrap_or(text);
            return Err(DashboardError::NotOk {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .json()
            .await
            .map_err(|e| DashboardError::Decode(e.to_string()))?;
        Ok(body)
    }
}
