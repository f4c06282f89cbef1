//! # Sentry Filter Events - Provider Implementations
//!
//! Adapters implementing the ports defined in `sfe-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Moka, Null |
//! | HTTP | `HttpFetchProvider` | Reqwest |
//! | Config | `ConfigValueProvider` | Static |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! sfe-providers = { version = "0.1", default-features = false }
//! ```
//!
//! builds without the Moka cache, leaving only the null cache.

// Re-export sfe-domain types commonly used with providers
pub use sfe_domain::error::{Error, Result};
pub use sfe_domain::ports::{CacheProvider, ConfigValueProvider, HttpFetchProvider};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;

/// Configuration provider implementations
pub mod config;

/// HTTP fetch provider implementations
pub mod http;
