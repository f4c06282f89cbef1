//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key-value store with per-entry TTL and tags |
//! | ConfigValueProvider | Path-addressed configuration lookup |
//! | HttpFetchProvider | Single GET of a remote resource |

/// Cache provider port
pub mod cache;
/// Config value provider port
pub mod config;
/// HTTP fetch provider port
pub mod http;

pub use cache::{CacheEntryConfig, CacheProvider, DEFAULT_CACHE_TTL_SECS};
pub use config::ConfigValueProvider;
pub use http::HttpFetchProvider;
