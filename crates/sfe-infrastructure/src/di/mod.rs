//! Dependency wiring

pub mod bootstrap;

pub use bootstrap::{AppContext, create_cache_provider, init_app, init_app_with_cache};
