//! Sentry event filtering configuration types
//!
//! Mirrors the `sentry/event_filtering/*` configuration paths read by the
//! filter through [`ConfigValueProvider`](sfe_domain::ports::ConfigValueProvider).

use serde::{Deserialize, Serialize};

/// `sentry` configuration section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentryConfig {
    /// Event filtering settings
    pub event_filtering: EventFilteringConfig,
}

/// `sentry.event_filtering` configuration section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFilteringConfig {
    /// Admin filter rules: a serialized rule list, or the rules inline as an
    /// array of `{ message = "..." }` tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<serde_json::Value>,

    /// URL of the remote default rules, empty to disable
    pub default_messages_external_location: String,

    /// Evict a freshly fetched default rules payload that fails to parse
    pub discard_unparseable_defaults: bool,
}
