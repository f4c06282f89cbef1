//! HTTP Client Configuration
//!
//! Settings of the client that fetches the remote default rules. The
//! defaults reproduce the fetch the rules list was designed for: HTTP/1.1,
//! a 10 second timeout and no certificate verification.

use crate::constants::HTTP_USER_AGENT;
use serde::{Deserialize, Serialize};
use sfe_domain::constants::DEFAULT_RULES_FETCH_TIMEOUT_SECS;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Total timeout for requests
    pub timeout: Duration,
    /// Verify the server's TLS certificate
    pub verify_tls: bool,
    /// Restrict the client to HTTP/1.1
    pub http1_only: bool,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_RULES_FETCH_TIMEOUT_SECS),
            verify_tls: false,
            http1_only: true,
            user_agent: HTTP_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Enable or disable certificate verification
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }
}
