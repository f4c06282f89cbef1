//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::cache::{CacheConfig, CacheProviderKind};
pub use super::http::HttpConfig;
pub use super::logging::LoggingConfig;
pub use super::sentry::{EventFilteringConfig, SentryConfig};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Event filtering settings
    pub sentry: SentryConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Default rules cache settings
    pub cache: CacheConfig,

    /// Remote fetch settings
    pub http: HttpConfig,
}
