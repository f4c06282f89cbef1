//! # Sentry Filter Events
//!
//! Before-send filtering of error events. Localized exceptions are reported
//! under their untranslated message, and events whose message contains an
//! admin-configured or remotely maintained pattern are dropped.
//!
//! ## Example
//!
//! ```ignore
//! use sfe::domain::{Event, EventHint};
//! use sfe::infrastructure::{config::ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new())?;
//! let event = context
//!     .event_filter()
//!     .before_send(Event::with_message("Deadlock found"), &EventHint::empty())
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Events, filter rules and the cache, config and HTTP ports
//! - `application` - The event filter and default rule resolution
//! - `providers` - Moka cache and reqwest fetch adapters
//! - `infrastructure` - Configuration, logging and wiring
//! - `cli` - The `sfe` command line

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sfe_domain::*;
}

/// Application layer - use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use sfe_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use sfe_providers::*;
}

/// Infrastructure layer - configuration, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use sfe_infrastructure::*;
}

pub mod cli;

pub use sfe_domain::{Error, Event, EventHint, FilterDecision, Result};
