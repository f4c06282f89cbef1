//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | No-op stub, always misses |
//! | [`MokaCacheProvider`] | Local | In-memory cache with per-entry TTL |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;

// Re-export domain types used by cache providers
pub use sfe_domain::ports::CacheEntryConfig;
