//! Default Rules Use Case
//!
//! Resolves the operator-maintained default filter rules: cached payload
//! first, remote fetch on a miss, empty list whenever anything on the remote
//! path goes wrong.

use sfe_domain::constants::{
    CONFIG_PATH_DEFAULT_MESSAGES_LOCATION, CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS,
    DEFAULT_RULES_CACHE_KEY, DEFAULT_RULES_CACHE_TAG, DEFAULT_RULES_CACHE_TTL_SECS,
};
use sfe_domain::error::Result;
use sfe_domain::ports::{CacheEntryConfig, CacheProvider, ConfigValueProvider, HttpFetchProvider};
use sfe_domain::value_objects::{FilterRule, parse_rule_list};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Decode a raw rules payload
fn decode_rules(payload: &[u8]) -> Result<Vec<FilterRule>> {
    let text = String::from_utf8(payload.to_vec())?;
    parse_rule_list(&text)
}

/// Cache-or-fetch source of the default filter rules
///
/// Only configuration lookups can fail a resolution. Cache errors degrade to a
/// miss (reads) or are ignored (writes), fetch and parse failures degrade to
/// an empty list.
pub struct DefaultRulesSource {
    cache: Arc<dyn CacheProvider>,
    config: Arc<dyn ConfigValueProvider>,
    http: Arc<dyn HttpFetchProvider>,
}

impl DefaultRulesSource {
    /// Create a new default rules source with injected collaborators
    pub fn new(
        cache: Arc<dyn CacheProvider>,
        config: Arc<dyn ConfigValueProvider>,
        http: Arc<dyn HttpFetchProvider>,
    ) -> Self {
        Self {
            cache,
            config,
            http,
        }
    }

    /// Resolve the default rules
    pub async fn resolve(&self) -> Result<Vec<FilterRule>> {
        if let Some(payload) = self.cached_payload().await {
            return Ok(match decode_rules(&payload) {
                Ok(rules) => {
                    debug!(count = rules.len(), "Default filter rules served from cache");
                    rules
                }
                Err(e) => {
                    warn!(error = %e, "Cached default filter rules are unreadable, using none");
                    Vec::new()
                }
            });
        }

        let Some(url) = self.remote_location()? else {
            debug!("No default rules location configured");
            return Ok(Vec::new());
        };

        let body = match self.http.get(&url).await {
            Ok(body) if !body.is_empty() => body,
            Ok(_) => {
                warn!(url = %url, "Default rules location returned an empty body");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch default filter rules");
                return Ok(Vec::new());
            }
        };

        // Stored before parsing, an unparseable payload stays cached unless
        // the discard policy is enabled.
        self.store_payload(&body).await;

        match decode_rules(&body) {
            Ok(rules) => {
                info!(url = %url, count = rules.len(), "Fetched default filter rules");
                Ok(rules)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Default filter rules payload is malformed");
                if self
                    .config
                    .is_set_flag(CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS)?
                {
                    self.discard_payload().await;
                }
                Ok(Vec::new())
            }
        }
    }

    /// Configured remote location, `None` when unset or blank
    fn remote_location(&self) -> Result<Option<String>> {
        Ok(self
            .config
            .get_value(CONFIG_PATH_DEFAULT_MESSAGES_LOCATION)?
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty()))
    }

    async fn cached_payload(&self) -> Option<Vec<u8>> {
        match self.cache.get(DEFAULT_RULES_CACHE_KEY).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    provider = self.cache.provider_name(),
                    error = %e,
                    "Default rules cache read failed, treating as miss"
                );
                None
            }
        }
    }

    async fn store_payload(&self, payload: &[u8]) {
        let entry = CacheEntryConfig::new()
            .with_ttl_secs(DEFAULT_RULES_CACHE_TTL_SECS)
            .with_tag(DEFAULT_RULES_CACHE_TAG);

        if let Err(e) = self
            .cache
            .set(DEFAULT_RULES_CACHE_KEY, payload, entry)
            .await
        {
            warn!(
                provider = self.cache.provider_name(),
                error = %e,
                "Failed to cache default filter rules"
            );
        }
    }

    async fn discard_payload(&self) {
        match self.cache.delete(DEFAULT_RULES_CACHE_KEY).await {
            Ok(_) => debug!("Discarded unparseable default rules payload"),
            Err(e) => warn!(error = %e, "Failed to discard unparseable default rules payload"),
        }
    }
}
