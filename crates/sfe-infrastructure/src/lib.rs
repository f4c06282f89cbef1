//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML/environment configuration with Figment |
//! | [`di`] | Composition root wiring providers into the event filter |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Error context extensions |
//! | [`constants`] | Infrastructure constants |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use di::{AppContext, init_app};
