//! HTTP Fetch Provider Port
//!
//! A single GET of a remote resource, returning the response body. Timeouts,
//! TLS policy and protocol version belong to the implementation.

use crate::error::Result;
use async_trait::async_trait;

/// HTTP fetch port
#[async_trait]
pub trait HttpFetchProvider: Send + Sync {
    /// Fetch the body at `url`
    ///
    /// Only transport failures are errors. The body is returned whatever the
    /// response status, an empty body as-is.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
