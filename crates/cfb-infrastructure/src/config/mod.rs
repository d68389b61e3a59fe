//! Configuration
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Serializable configuration sections |
//! | [`loader`] | Figment loading, validation and TOML export |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, BackupConfig, LoggingConfig, StoreConfig};
