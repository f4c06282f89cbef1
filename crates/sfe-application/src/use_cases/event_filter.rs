//! Event Filter Use Case
//!
//! Before-send filtering of error events. Localized exceptions are rewritten
//! to their untranslated message so the tracking service groups them the same
//! way regardless of the visitor's locale. Events whose message contains a
//! filter pattern are suppressed.

use crate::use_cases::default_rules::DefaultRulesSource;
use serde_json::json;
use sfe_domain::constants::{CONFIG_PATH_MESSAGES, MESSAGE_CONTEXT_NAME};
use sfe_domain::error::Result;
use sfe_domain::ports::ConfigValueProvider;
use sfe_domain::value_objects::{
    Event, EventHint, FilterDecision, FilterList, FilterRule, parse_rule_list,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Messages the filter matches rules against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    /// Message rules are matched against first
    pub effective: String,
    /// Untranslated template, empty unless the exception is localized
    pub raw: String,
}

/// Determine the effective and raw message, rewriting localized events
///
/// Without an exception the event's own message is effective. A plain
/// exception contributes its message. A localized exception replaces the
/// event message and the first exception value with the untranslated
/// message and records all forms under the `message` context.
pub fn resolve_message(event: &mut Event, hint: &EventHint) -> ResolvedMessage {
    let Some(exception) = hint.exception.as_ref() else {
        return ResolvedMessage {
            effective: event.message.clone(),
            raw: String::new(),
        };
    };

    let Some(localized) = exception.localized.as_ref() else {
        return ResolvedMessage {
            effective: exception.message.clone(),
            raw: String::new(),
        };
    };

    event.message.clone_from(&localized.log_message);
    event.set_context(
        MESSAGE_CONTEXT_NAME,
        json!({
            "raw_message": localized.raw_message,
            "parameters": localized.parameters,
            "message": localized.log_message,
            "translated_message": exception.message,
        }),
    );
    if let Some(frame) = event.first_exception_mut() {
        frame.value.clone_from(&localized.log_message);
    }

    ResolvedMessage {
        effective: localized.log_message.clone(),
        raw: localized.raw_message.clone(),
    }
}

/// Event filter service
///
/// Admin rules are read from configuration on every call, default rules come
/// from the injected [`DefaultRulesSource`].
pub struct EventFilterService {
    config: Arc<dyn ConfigValueProvider>,
    default_rules: DefaultRulesSource,
}

impl EventFilterService {
    /// Create a new event filter with injected dependencies
    pub fn new(config: Arc<dyn ConfigValueProvider>, default_rules: DefaultRulesSource) -> Self {
        Self {
            config,
            default_rules,
        }
    }

    /// Filter an event in place
    ///
    /// The event may be rewritten even when it ends up suppressed. Only
    /// configuration errors, including a malformed admin rule list, are
    /// returned.
    pub async fn filter_event(&self, event: &mut Event, hint: &EventHint) -> Result<FilterDecision> {
        let message = resolve_message(event, hint);
        let rules = self.filter_list().await?;

        match rules.first_match(&message.effective, &message.raw) {
            Some(entry) => {
                info!(
                    pattern = %entry.rule.message,
                    source = %entry.source,
                    "Suppressing event matching filter rule"
                );
                Ok(FilterDecision::Suppressed {
                    pattern: entry.rule.message.clone(),
                    source: entry.source,
                })
            }
            None => {
                debug!(rules = rules.len(), "Event passed filter");
                Ok(FilterDecision::Send)
            }
        }
    }

    /// Before-send callback form: the event to transmit, or `None` to drop it
    pub async fn before_send(&self, mut event: Event, hint: &EventHint) -> Result<Option<Event>> {
        Ok(match self.filter_event(&mut event, hint).await? {
            FilterDecision::Send => Some(event),
            FilterDecision::Suppressed { .. } => None,
        })
    }

    /// Combined list: admin rules followed by default rules
    pub async fn filter_list(&self) -> Result<FilterList> {
        let admin = self.admin_rules()?;
        let defaults = self.default_rules.resolve().await?;
        Ok(FilterList::merge(admin, defaults))
    }

    /// Admin-configured rules, read fresh from configuration
    ///
    /// An unset or blank value means no rules. A malformed value is an error.
    pub fn admin_rules(&self) -> Result<Vec<FilterRule>> {
        match self.config.get_value(CONFIG_PATH_MESSAGES)? {
            Some(serialized) if !serialized.trim().is_empty() => parse_rule_list(&serialized),
            _ => Ok(Vec::new()),
        }
    }
}
