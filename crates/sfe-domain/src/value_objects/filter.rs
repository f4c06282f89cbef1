//! Filter rule value objects
//!
//! A filter rule is a plain substring pattern. Rules are evaluated in list
//! order and the first one contained in the event message suppresses it.

use crate::error::{Error, Result};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single substring pattern that suppresses matching events
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterRule {
    /// Substring searched for in the event message
    pub message: String,
}

impl FilterRule {
    /// Create a rule for the given pattern
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Check the rule against the effective and raw message
    ///
    /// The raw message only takes part when non-empty. An empty pattern never
    /// matches.
    pub fn matches(&self, effective: &str, raw: &str) -> bool {
        if self.message.is_empty() {
            return false;
        }
        effective.contains(&self.message) || (!raw.is_empty() && raw.contains(&self.message))
    }
}

/// Where a rule in the combined list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSource {
    /// Admin configuration, read fresh on every evaluation
    Admin,
    /// Remote default list, served from cache when possible
    Default,
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A rule paired with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    /// The rule itself
    #[serde(flatten)]
    pub rule: FilterRule,
    /// Origin of the rule
    pub source: RuleSource,
}

/// Ordered combination of admin rules followed by default rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterList {
    entries: Vec<FilterEntry>,
}

impl FilterList {
    /// Merge admin rules with default rules, admin rules first
    pub fn merge(admin: Vec<FilterRule>, defaults: Vec<FilterRule>) -> Self {
        let admin = admin.into_iter().map(|rule| FilterEntry {
            rule,
            source: RuleSource::Admin,
        });
        let defaults = defaults.into_iter().map(|rule| FilterEntry {
            rule,
            source: RuleSource::Default,
        });
        Self {
            entries: admin.chain(defaults).collect(),
        }
    }

    /// First entry whose pattern matches, evaluation stops there
    pub fn first_match(&self, effective: &str, raw: &str) -> Option<&FilterEntry> {
        self.entries
            .iter()
            .find(|entry| entry.rule.matches(effective, raw))
    }

    /// Iterate over the entries in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &FilterEntry> {
        self.entries.iter()
    }

    /// Number of rules in the list
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no rules
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of running an event through the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// Transmit the (possibly rewritten) event
    Send,
    /// Drop the event, it must not be transmitted
    Suppressed {
        /// Pattern of the rule that matched
        pattern: String,
        /// Origin of the rule that matched
        source: RuleSource,
    },
}

impl FilterDecision {
    /// Whether the event was dropped
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed { .. })
    }
}

/// Deserialize a serialized rule list
///
/// Accepts a JSON array of `{"message": ...}` objects or an object keyed by
/// row id whose values are such objects. Row ids are dropped and value order
/// is kept. `null` yields an empty list.
pub fn parse_rule_list(payload: &str) -> Result<Vec<FilterRule>> {
    let rows = match serde_json::from_str::<Value>(payload)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(rows) => rows,
        Value::Object(rows) => rows.into_iter().map(|(_, row)| row).collect(),
        other => {
            return Err(Error::Json {
                source: serde_json::Error::custom(format!(
                    "expected a list of filter rules, found {}",
                    json_kind(&other)
                )),
            });
        }
    };

    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Error::from))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
