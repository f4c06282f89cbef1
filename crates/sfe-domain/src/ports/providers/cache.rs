//! Cache Provider Port
//!
//! Port for cache backend providers. Values are raw bytes stored with a
//! per-entry TTL and zero or more invalidation tags.
//!
//! A read after an entry's TTL has elapsed must behave as a miss. That is the
//! provider's responsibility, callers never check expiry themselves.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default TTL for cache entries (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Cache Entry Configuration
///
/// Configures how a cache entry should be stored: its TTL and the tags it
/// can later be invalidated by.
///
/// # Example
///
/// ```
/// use sfe_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default()
///     .with_ttl_secs(604_800)
///     .with_tag("SENTRY_FILTER_EVENTS");
/// assert_eq!(config.effective_ttl(), Duration::from_secs(604_800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
    /// Invalidation tags of the entry
    pub tags: Vec<String>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with default TTL and no tags
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
            tags: Vec::new(),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Add an invalidation tag
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Get the effective TTL, falling back to default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Provider Port
///
/// # Implementations
///
/// - **Moka**: In-memory cache with per-entry TTL and a tag index
/// - **Null**: Always misses, accepts writes
///
/// # Example
///
/// ```ignore
/// use sfe_domain::ports::{CacheEntryConfig, CacheProvider};
///
/// cache
///     .set("rules", payload.as_bytes(), CacheEntryConfig::default().with_ttl_secs(60))
///     .await?;
///
/// if let Some(bytes) = cache.get("rules").await? {
///     let text = String::from_utf8(bytes)?;
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get the bytes stored under `key`
    ///
    /// # Returns
    /// The stored bytes if present, None if not found or expired
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store bytes under `key` with the TTL and tags from `config`
    async fn set(&self, key: &str, value: &[u8], config: CacheEntryConfig) -> Result<()>;

    /// Delete a value from the cache
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check if a key exists in the cache and hasn't expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Drop every entry stored with `tag`
    ///
    /// # Returns
    /// The number of entries that were invalidated
    async fn invalidate_tag(&self, tag: &str) -> Result<usize>;

    /// Clear all values from the cache
    async fn clear(&self) -> Result<()>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
