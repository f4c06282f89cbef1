//! Static configuration provider
//!
//! Serves a fixed set of path/value pairs. Values can be replaced at runtime,
//! and readers always see the latest value.

use sfe_domain::error::Result;
use sfe_domain::ports::ConfigValueProvider;
use std::collections::HashMap;
use std::sync::RwLock;

/// Config provider backed by an in-memory map
#[derive(Debug, Default)]
pub struct StaticConfigProvider {
    values: RwLock<HashMap<String, String>>,
}

impl StaticConfigProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style
    pub fn with_value<P: Into<String>, V: Into<String>>(self, path: P, value: V) -> Self {
        self.set_value(path, value);
        self
    }

    /// Set or replace the value at `path`
    pub fn set_value<P: Into<String>, V: Into<String>>(&self, path: P, value: V) {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(path.into(), value.into());
    }

    /// Remove the value at `path`
    pub fn remove_value(&self, path: &str) -> Option<String> {
        self.values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(path)
    }
}

impl ConfigValueProvider for StaticConfigProvider {
    fn get_value(&self, path: &str) -> Result<Option<String>> {
        Ok(self
            .values
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(path)
            .cloned())
    }
}
