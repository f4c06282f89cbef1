//! Application Layer - Sentry Filter Events
//!
//! Use cases for filtering error events before they are sent to Sentry.
//!
//! ## Use Cases
//!
//! - [`EventFilterService`]: rewrites localized events and suppresses events
//!   matching a filter rule
//! - [`DefaultRulesSource`]: cache-or-fetch resolution of the remote default
//!   rules
//!
//! ## Dependencies
//!
//! This crate depends only on `sfe-domain` for types and port traits.
//! Concrete cache, configuration and HTTP adapters are injected.

pub mod use_cases;

pub use sfe_domain::ports;
pub use use_cases::*;
