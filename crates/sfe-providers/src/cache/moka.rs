//! Moka in-memory cache provider
//!
//! High-performance, concurrent in-memory cache implementation using Moka.
//!
//! ## Features
//!
//! - Capacity bounded by the total size of stored values
//! - Per-entry TTL taken from each entry's [`CacheEntryConfig`]
//! - Tag index for invalidating groups of entries
//!
//! ## Example
//!
//! ```ignore
//! use sfe_providers::cache::MokaCacheProvider;
//!
//! let provider = MokaCacheProvider::with_capacity(1024 * 1024);
//! ```

use crate::constants::CACHE_DEFAULT_SIZE_LIMIT;
use async_trait::async_trait;
use dashmap::DashMap;
use moka::Expiry;
use moka::future::Cache;
use sfe_domain::error::{Error, Result};
use sfe_domain::ports::{CacheEntryConfig, CacheProvider};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Stored value with the TTL and tags it was written with
#[derive(Clone)]
struct CachedEntry {
    bytes: Arc<[u8]>,
    ttl: Duration,
    tags: Arc<[String]>,
}

/// Expires every entry after its own TTL, restarting it on overwrite
struct EntryExpiry;

impl Expiry<String, CachedEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-based in-memory cache provider
///
/// Capacity is measured in bytes of stored values. Tags are tracked in a
/// side index so [`CacheProvider::invalidate_tag`] can find their keys.
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, CachedEntry>,
    tags: Arc<DashMap<String, HashSet<String>>>,
    max_size: usize,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_SIZE_LIMIT)
    }

    /// Create a new Moka cache provider holding at most `max_size` bytes
    pub fn with_capacity(max_size: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_size as u64)
            .weigher(|_key: &String, value: &CachedEntry| {
                u32::try_from(value.bytes.len()).unwrap_or(u32::MAX)
            })
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            tags: Arc::new(DashMap::new()),
            max_size,
        }
    }

    /// Get the maximum capacity of the cache in bytes
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn index_tags(&self, key: &str, tags: &[String]) {
        for tag in tags {
            self.tags
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
    }

    fn unindex_tags(&self, key: &str, tags: &[String]) {
        for tag in tags {
            if let Some(mut keys) = self.tags.get_mut(tag) {
                keys.remove(key);
            }
        }
        self.tags.retain(|_, keys| !keys.is_empty());
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.cache.get(key).await.map(|entry| entry.bytes.to_vec()))
    }

    async fn set(&self, key: &str, value: &[u8], config: CacheEntryConfig) -> Result<()> {
        // Check if the value exceeds our size limit
        if value.len() > self.max_size {
            return Err(Error::cache(format!(
                "Cache value size {} exceeds maximum size {}",
                value.len(),
                self.max_size
            )));
        }

        if let Some(previous) = self.cache.get(key).await {
            self.unindex_tags(key, &previous.tags);
        }

        let entry = CachedEntry {
            bytes: Arc::from(value),
            ttl: config.effective_ttl(),
            tags: Arc::from(config.tags),
        };
        self.index_tags(key, &entry.tags);
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        match self.cache.remove(key).await {
            Some(entry) => {
                self.unindex_tags(key, &entry.tags);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<usize> {
        let Some((_, keys)) = self.tags.remove(tag) else {
            return Ok(0);
        };

        let mut invalidated = 0;
        for key in keys {
            if let Some(entry) = self.cache.remove(&key).await {
                self.unindex_tags(&key, &entry.tags);
                invalidated += 1;
            }
        }
        Ok(invalidated)
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        self.tags.clear();
        Ok(())
    }

    async fn size(&self) -> Result<usize> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        Ok(usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX))
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_size", &self.max_size)
            .field("entries", &self.cache.entry_count())
            .field("tags", &self.tags.len())
            .finish()
    }
}
