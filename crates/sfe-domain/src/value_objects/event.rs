//! Error event value objects
//!
//! [`Event`] is the report under construction that the host hands to the
//! filter before transmission. [`EventHint`] carries the exception that
//! triggered it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Error event destined for the remote tracking service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event message
    #[serde(default)]
    pub message: String,

    /// Structured contexts keyed by name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub contexts: BTreeMap<String, Value>,

    /// Recorded exception frames, outermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exceptions: Vec<ExceptionFrame>,
}

impl Event {
    /// Create an event with only a message
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Attach or replace a named context
    pub fn set_context<S: Into<String>>(&mut self, name: S, value: Value) {
        self.contexts.insert(name.into(), value);
    }

    /// Look up a named context
    pub fn context(&self, name: &str) -> Option<&Value> {
        self.contexts.get(name)
    }

    /// First recorded exception frame, if any
    pub fn first_exception_mut(&mut self) -> Option<&mut ExceptionFrame> {
        self.exceptions.first_mut()
    }
}

/// One recorded exception of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionFrame {
    /// Exception type name
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    /// Exception value (its message)
    #[serde(default)]
    pub value: String,
}

impl ExceptionFrame {
    /// Create a frame with the given value
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            ty: None,
            value: value.into(),
        }
    }
}

/// Auxiliary data attached to an event by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventHint {
    /// Exception that triggered the event
    #[serde(default)]
    pub exception: Option<HintException>,
}

impl EventHint {
    /// Hint without an exception
    pub fn empty() -> Self {
        Self::default()
    }

    /// Hint carrying the given exception
    pub fn with_exception(exception: HintException) -> Self {
        Self {
            exception: Some(exception),
        }
    }
}

/// Triggering exception as seen by the filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HintException {
    /// Display message, translated when the exception is localized
    pub message: String,

    /// Untranslated forms, present only for localized exceptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized: Option<LocalizedMessage>,
}

impl HintException {
    /// Plain exception with a single message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            localized: None,
        }
    }

    /// Localized exception with translated and untranslated forms
    pub fn localized<S: Into<String>>(translated: S, localized: LocalizedMessage) -> Self {
        Self {
            message: translated.into(),
            localized: Some(localized),
        }
    }
}

/// Untranslated forms of a localized exception message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedMessage {
    /// Untranslated message with parameters substituted
    pub log_message: String,

    /// Untranslated template without parameters substituted
    pub raw_message: String,

    /// Template parameters, positional or named
    #[serde(default)]
    pub parameters: Value,
}
