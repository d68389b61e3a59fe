//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `cfb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cfb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cfb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CFB";

/// Separator between nested keys in environment variable names
///
/// `CFB_BACKUP__MAX_BACKUPS` sets `backup.max_backups`.
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// BACKUP CONSTANTS
// ============================================================================

/// Default directory holding backup files
pub const DEFAULT_BACKUP_DIRECTORY: &str = "./backups";

/// Default directory holding the JSON configuration store
pub const DEFAULT_STORE_DIRECTORY: &str = "./config";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "CFB_LOG";

/// File stem used when the log path has none
pub const LOG_FILE_STEM: &str = "cfb";
