//! Composition root
//!
//! Builds the provider set described by [`AppConfig`] and wires it into the
//! event filter.
//!
//! ```text
//! ConfigLoader → AppConfig → cache / fetch providers ─┐
//!      └──────→ FigmentConfigProvider ────────────────┴→ EventFilterService
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new())?;
//! let decision = context.event_filter().filter_event(&mut event, &hint).await?;
//! ```

use crate::config::{AppConfig, CacheConfig, CacheProviderKind, ConfigLoader, FigmentConfigProvider};
use sfe_application::use_cases::{DefaultRulesSource, EventFilterService};
use sfe_domain::error::Result;
use sfe_domain::ports::{CacheProvider, ConfigValueProvider, HttpFetchProvider};
use sfe_providers::cache::{MokaCacheProvider, NullCacheProvider};
use sfe_providers::http::ReqwestFetchProvider;
use std::sync::Arc;
use tracing::info;

/// Application context holding the configured providers and the filter
pub struct AppContext {
    /// Configuration snapshot taken at startup
    pub config: Arc<AppConfig>,
    cache: Arc<dyn CacheProvider>,
    config_values: Arc<dyn ConfigValueProvider>,
    http: Arc<dyn HttpFetchProvider>,
    event_filter: Arc<EventFilterService>,
}

impl AppContext {
    /// Cache holding the default rules payload
    pub fn cache(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.cache)
    }

    /// Live configuration lookup used by the filter
    pub fn config_values(&self) -> Arc<dyn ConfigValueProvider> {
        Arc::clone(&self.config_values)
    }

    /// Remote rules fetcher
    pub fn http(&self) -> Arc<dyn HttpFetchProvider> {
        Arc::clone(&self.http)
    }

    /// The before-send event filter
    pub fn event_filter(&self) -> Arc<EventFilterService> {
        Arc::clone(&self.event_filter)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache", &self.cache.provider_name())
            .field("http", &self.http.provider_name())
            .finish_non_exhaustive()
    }
}

/// Create the cache provider selected by configuration
pub fn create_cache_provider(config: &CacheConfig) -> Arc<dyn CacheProvider> {
    match config.provider {
        CacheProviderKind::Moka => Arc::new(MokaCacheProvider::with_capacity(config.max_size)),
        CacheProviderKind::Null => Arc::new(NullCacheProvider::new()),
    }
}

/// Load configuration and build the application context
pub fn init_app(loader: ConfigLoader) -> Result<AppContext> {
    let config = loader.load()?;
    let cache = create_cache_provider(&config.cache);
    init_app_with_cache(loader, config, cache)
}

/// Build the application context around an existing cache
///
/// Lets callers share one cache between contexts, or inject their own.
pub fn init_app_with_cache(
    loader: ConfigLoader,
    config: AppConfig,
    cache: Arc<dyn CacheProvider>,
) -> Result<AppContext> {
    let http: Arc<dyn HttpFetchProvider> =
        Arc::new(ReqwestFetchProvider::new(config.http.client_config())?);
    let config_values: Arc<dyn ConfigValueProvider> =
        Arc::new(FigmentConfigProvider::new(loader));

    let default_rules = DefaultRulesSource::new(
        Arc::clone(&cache),
        Arc::clone(&config_values),
        Arc::clone(&http),
    );
    let event_filter = Arc::new(EventFilterService::new(
        Arc::clone(&config_values),
        default_rules,
    ));

    info!(
        cache = cache.provider_name(),
        fetch = http.provider_name(),
        "Event filter initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        cache,
        config_values,
        http,
        event_filter,
    })
}
