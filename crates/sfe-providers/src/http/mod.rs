//! HTTP Fetch Implementations
//!
//! ## Contents
//!
//! - `HttpClientConfig` - Timeout, TLS and protocol settings of the fetch client
//! - `ReqwestFetchProvider` - `HttpFetchProvider` backed by reqwest

pub mod fetch;
pub mod provider;

pub use fetch::ReqwestFetchProvider;
pub use provider::HttpClientConfig;
