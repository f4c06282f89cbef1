//! Configuration types module

pub mod app;
pub mod cache;
pub mod http;
pub mod logging;
pub mod sentry;

// Re-export main types
pub use app::*;
