//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - GitHub JSON media type on every request
//! - Status and transport errors mapped to RegistryError
//!
//! Requests are sent exactly once; there is no retry logic.

use crate::error::RegistryError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header (GitHub rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = concat!("modcheck/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the GitHub REST API
const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| RegistryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self { client, timeout })
    }

    /// Create a new HTTP client with a custom timeout and the default User-Agent
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Perform a single GET request and return the successful response
    ///
    /// `repo` is only used as error context.
    pub async fn get(&self, url: &str, repo: &str) -> Result<reqwest::Response, RegistryError> {
        debug!("GET {} (timeout {:?})", url, self.timeout);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(repo)
            } else {
                RegistryError::network_error(repo, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::http_status(repo, status.as_u16(), body));
        }

        Ok(response)
    }

    /// Perform a single GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        repo: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get(url, repo).await?;
        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(repo)
            } else {
                RegistryError::invalid_response(repo, format!("failed to parse JSON: {}", e))
            }
        })
    }
}
