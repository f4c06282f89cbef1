//! Cache configuration types

use crate::constants::CACHE_DEFAULT_SIZE_LIMIT;
use serde::{Deserialize, Serialize};

/// Cache providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheProviderKind {
    /// In-memory cache (Moka)
    #[default]
    Moka,
    /// No caching, every resolution fetches
    Null,
}

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache provider
    pub provider: CacheProviderKind,

    /// Maximum cache size in bytes
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: CacheProviderKind::Moka,
            max_size: CACHE_DEFAULT_SIZE_LIMIT,
        }
    }
}
