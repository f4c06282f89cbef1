//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values.

use crate::config::AppConfig;
use crate::config::types::CacheProviderKind;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sfe_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `SFE__LOGGING__LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        match self.config_file() {
            Some(path) => log_config_loaded(&path, true),
            None => {
                if let Some(path) = &self.config_path {
                    log_config_loaded(path, false);
                }
            }
        }

        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Merged configuration sources, read from disk and environment anew
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.config_file() {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nested keys so single underscores can
        // stay inside key names (e.g. SFE__SENTRY__EVENT_FILTERING__MESSAGES)
        figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        )
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Existing configuration file to merge, if any
    fn config_file(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => path.exists().then(|| path.clone()),
            None => Self::find_default_config_path(),
        }
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|path| !path.as_os_str().is_empty() && path.exists())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_cache_config(config)?;
    validate_http_config(config)?;
    validate_filtering_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    if config.cache.provider == CacheProviderKind::Moka && config.cache.max_size == 0 {
        return Err(Error::configuration(
            "Cache max_size cannot be 0 when the moka provider is used",
        ));
    }
    Ok(())
}

fn validate_http_config(config: &AppConfig) -> Result<()> {
    if config.http.timeout_secs == 0 {
        return Err(Error::configuration("HTTP timeout cannot be 0"));
    }
    Ok(())
}

fn validate_filtering_config(config: &AppConfig) -> Result<()> {
    let location = config
        .sentry
        .event_filtering
        .default_messages_external_location
        .trim();
    if !location.is_empty()
        && !(location.starts_with("http://") || location.starts_with("https://"))
    {
        return Err(Error::configuration(format!(
            "Default messages location must be an http(s) URL: {location}"
        )));
    }
    Ok(())
}
