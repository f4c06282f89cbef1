//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `sfe_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "sfe.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "sfe";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SFE";

/// Separator between the prefix and nested keys of configuration env vars
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "SFE_LOG";

/// File stem of rolling log files when none is given
pub const LOG_FILE_DEFAULT_STEM: &str = "sfe";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

pub use sfe_providers::constants::CACHE_DEFAULT_SIZE_LIMIT;
