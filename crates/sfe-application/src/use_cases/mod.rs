//! Use case implementations

/// Cache-or-fetch resolution of the default filter rules
pub mod default_rules;
/// Before-send event filtering
pub mod event_filter;

pub use default_rules::DefaultRulesSource;
pub use event_filter::{EventFilterService, ResolvedMessage, resolve_message};
