//! Configuration
//!
//! Layered configuration (defaults, TOML file, environment) loaded with
//! Figment, and the path-addressed [`FigmentConfigProvider`] the filter reads
//! its settings through.

pub mod loader;
pub mod types;
pub mod values;

pub use loader::ConfigLoader;
pub use types::*;
pub use values::FigmentConfigProvider;
