//! HTTP client configuration types

use serde::{Deserialize, Serialize};
use sfe_domain::constants::DEFAULT_RULES_FETCH_TIMEOUT_SECS;
use sfe_providers::http::HttpClientConfig;
use std::time::Duration;

/// Remote fetch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Verify the remote server's TLS certificate
    pub verify_tls: bool,

    /// User agent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_RULES_FETCH_TIMEOUT_SECS,
            verify_tls: false,
            user_agent: None,
        }
    }
}

impl HttpConfig {
    /// Client settings for the fetch provider
    pub fn client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::with_timeout(Duration::from_secs(self.timeout_secs))
            .with_verify_tls(self.verify_tls);
        if let Some(user_agent) = &self.user_agent {
            config.user_agent.clone_from(user_agent);
        }
        config
    }
}
