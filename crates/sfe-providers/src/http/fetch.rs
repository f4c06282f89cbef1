//! Reqwest fetch provider
//!
//! Implements the [`HttpFetchProvider`] port with a reqwest client built from
//! [`HttpClientConfig`].

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;
use crate::http::HttpClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use sfe_domain::error::{Error, Result};
use sfe_domain::ports::HttpFetchProvider;
use tracing::{debug, warn};

/// Reqwest-backed fetch provider
///
/// ## Example
///
/// ```rust,no_run
/// use sfe_providers::http::{HttpClientConfig, ReqwestFetchProvider};
///
/// fn example() -> sfe_domain::Result<()> {
///     let provider = ReqwestFetchProvider::new(HttpClientConfig::default())?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestFetchProvider {
    client: Client,
    config: HttpClientConfig,
}

impl ReqwestFetchProvider {
    /// Build the client described by `config`
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        if !config.verify_tls {
            warn!("TLS certificate verification is disabled for default rules fetching");
        }

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(!config.verify_tls);
        if config.http1_only {
            builder = builder.http1_only();
        }

        let client = builder
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl HttpFetchProvider for ReqwestFetchProvider {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url = %url, "Fetching remote resource");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(format!(
                    "{} {:?}",
                    ERROR_MSG_REQUEST_TIMEOUT, self.config.timeout
                ))
            } else {
                Error::network_with_source(format!("GET {url} failed"), e)
            }
        })?;

        // Error pages are returned as bodies, callers cache them like any other
        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Remote resource answered with a non-success status");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network_with_source(format!("Reading body of {url} failed"), e))?;

        Ok(body.to_vec())
    }

    fn provider_name(&self) -> &str {
        "reqwest"
    }
}
