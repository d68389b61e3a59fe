//! Main application configuration

use super::{BackupConfig, LoggingConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Root configuration, one field per TOML table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backup creation, retention and encoding
    #[serde(default)]
    pub backup: BackupConfig,

    /// Location of the live configuration store
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
