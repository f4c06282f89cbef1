//! # Sentry Filter Events - Domain Layer
//!
//! Core types and port traits for filtering error events before they are
//! sent to Sentry.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Cache identifiers and configuration paths |
//! | [`value_objects`] | Filter rules, events and hints |
//! | [`ports`] | Cache, configuration and HTTP collaborator ports |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    Event, EventHint, ExceptionFrame, FilterDecision, FilterEntry, FilterList, FilterRule,
    HintException, LocalizedMessage, RuleSource,
};
