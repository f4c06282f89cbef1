//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `sfe_domain::constants`.

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default cache size limit in bytes (16MB)
pub const CACHE_DEFAULT_SIZE_LIMIT: usize = 16 * 1024 * 1024;

// ============================================================================
// HTTP PROVIDER CONSTANTS
// ============================================================================

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default user agent of the fetch client
pub const HTTP_USER_AGENT: &str = concat!("sentry-filter-events/", env!("CARGO_PKG_VERSION"));
