// Libricat - Personal Book Catalog
// Copyright (C) 2026 Libricat contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! HTTP client for the external book catalog
//!
//! A thin wrapper around `reqwest::Client` that issues a single title
//! search per call. The search term is URL-encoded into the `search`
//! query parameter of the configured base URL.
//!
//! Failures are reported as `ApiRequestFailed` (transport, non-2xx status)
//! or `InvalidApiResponse` (undecodable body). A failed call has no side
//! effects and is never retried.

use crate::api::search::SearchResponse;
use crate::error::{CatalogError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Public Gutendex instance queried by default
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books/";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for GutendexClient
/// Provides a builder pattern for client customization
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("libricat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for ClientConfig
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for a Gutendex-compatible catalog API
#[derive(Debug, Clone)]
pub struct GutendexClient {
    client: Client,
    base_url: Url,
}

impl GutendexClient {
    /// Create a new client against the default public instance
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns error if the base URL does not parse or the HTTP client
    /// cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            CatalogError::api_failed(
                format!("invalid base URL '{}': {}", config.base_url, e),
                None,
                Some(config.base_url.clone()),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                CatalogError::api_failed(format!("invalid user agent: {}", e), None, None)
            })?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Create a builder for custom client configuration
    pub fn builder() -> ClientConfigBuilder {
        ClientConfig::builder()
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Search the catalog by title
    ///
    /// Issues `GET {base_url}?search=<url-encoded term>` and decodes the
    /// first page of results. The result set is returned in API order.
    pub async fn search(&self, term: &str) -> Result<SearchResponse> {
        let url = format!("{}?search={}", self.base_url, urlencoding::encode(term));
        debug!(%url, "searching catalog");

        let response = self.client.get(&url).send().await.map_err(|e| {
            CatalogError::api_failed(
                e.to_string(),
                e.status().map(|s| s.as_u16()),
                Some(url.clone()),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::api_failed(
                format!("unexpected status {}", status),
                Some(status.as_u16()),
                Some(url),
            ));
        }

        let body = response.text().await.map_err(|e| {
            CatalogError::api_failed(e.to_string(), Some(status.as_u16()), Some(url.clone()))
        })?;

        serde_json::from_str(&body).map_err(|e| CatalogError::InvalidApiResponse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_gutendex() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builder_overrides_base_url() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8000/books/")
            .timeout(Duration::from_secs(5))
            .build();

        let client = GutendexClient::with_config(config).expect("client should build");
        assert_eq!(client.base_url(), "http://localhost:8000/books/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = ClientConfig::builder().base_url("not a url").build();
        let err = GutendexClient::with_config(config).unwrap_err();
        assert!(matches!(err, CatalogError::ApiRequestFailed { .. }));
    }
}
