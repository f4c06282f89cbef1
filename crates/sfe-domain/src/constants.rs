//! Domain layer constants
//!
//! Cache identifiers, configuration paths and limits shared by the filter
//! use cases and the adapters that serve them.

// ============================================================================
// DEFAULT RULES CACHE CONSTANTS
// ============================================================================

/// Cache key under which the raw remote default rules payload is stored
pub const DEFAULT_RULES_CACHE_KEY: &str = "sentry_filter_events";

/// Invalidation tag attached to the default rules cache entry
pub const DEFAULT_RULES_CACHE_TAG: &str = "SENTRY_FILTER_EVENTS";

/// TTL of the cached default rules payload in seconds (7 days)
pub const DEFAULT_RULES_CACHE_TTL_SECS: u64 = 604_800;

// ============================================================================
// CONFIGURATION PATHS
// ============================================================================

/// Admin-configured filter rules (serialized rule list)
pub const CONFIG_PATH_MESSAGES: &str = "sentry/event_filtering/messages";

/// URL of the remote default rules list, empty to disable
pub const CONFIG_PATH_DEFAULT_MESSAGES_LOCATION: &str =
    "sentry/event_filtering/default_messages_external_location";

/// Whether an unparseable freshly fetched payload is evicted from the cache
pub const CONFIG_PATH_DISCARD_UNPARSEABLE_DEFAULTS: &str =
    "sentry/event_filtering/discard_unparseable_defaults";

/// Separator between segments of a configuration path
pub const CONFIG_PATH_SEPARATOR: char = '/';

// ============================================================================
// REMOTE FETCH CONSTANTS
// ============================================================================

/// Timeout of the remote default rules request in seconds
pub const DEFAULT_RULES_FETCH_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// EVENT CONSTANTS
// ============================================================================

/// Name of the event context entry holding the localized message details
pub const MESSAGE_CONTEXT_NAME: &str = "message";
