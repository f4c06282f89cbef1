//! Path-addressed configuration values
//!
//! Implements [`ConfigValueProvider`] on top of the Figment sources of a
//! [`ConfigLoader`]. Every lookup merges the sources again, so edits to the
//! TOML file or the environment are visible to the next filtered event.

use crate::config::ConfigLoader;
use crate::error_ext::ErrorContext;
use figment::value::Value;
use sfe_domain::constants::CONFIG_PATH_SEPARATOR;
use sfe_domain::error::Result;
use sfe_domain::ports::ConfigValueProvider;

/// Figment-backed configuration lookup
#[derive(Debug, Clone)]
pub struct FigmentConfigProvider {
    loader: ConfigLoader,
}

impl FigmentConfigProvider {
    /// Create a provider reading the sources of `loader`
    pub fn new(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// Loader whose sources are read
    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }
}

/// Convert a `/`-separated configuration path to a Figment key path
fn to_key_path(path: &str) -> String {
    path.trim_matches(CONFIG_PATH_SEPARATOR)
        .replace(CONFIG_PATH_SEPARATOR, ".")
}

impl ConfigValueProvider for FigmentConfigProvider {
    fn get_value(&self, path: &str) -> Result<Option<String>> {
        let key = to_key_path(path);
        let value = match self.loader.figment().find_value(&key) {
            Ok(value) => value,
            Err(e) if e.missing() => return Ok(None),
            Err(e) => {
                return Err(e).config_context(format!("Failed to read configuration value {path}"));
            }
        };

        match value {
            Value::Empty(..) => Ok(None),
            Value::String(_, text) => Ok(Some(text)),
            Value::Char(_, c) => Ok(Some(c.to_string())),
            // Structured values (inline rule tables, flags, numbers) are
            // handed over as JSON
            other => serde_json::to_string(&other)
                .config_context(format!("Failed to serialize configuration value {path}"))
                .map(Some),
        }
    }
}
