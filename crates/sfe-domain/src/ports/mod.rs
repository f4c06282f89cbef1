//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the filter use cases and the
//! collaborators it depends on. High-level code depends on these traits,
//! providers and infrastructure implement them.
//!
//! ## Organization
//!
//! - **providers/** - External collaborator ports (cache, configuration, HTTP)

/// External collaborator ports
pub mod providers;

pub use providers::{CacheEntryConfig, CacheProvider, ConfigValueProvider, HttpFetchProvider};
