//! # CFB - Configuration Backup
//!
//! Backs up the app, platform and work configuration sections, keeps the
//! newest few backups, and restores them through schema migration.
//!
//! ## Features
//!
//! - **Compression**: deterministic gzip + base64 payloads
//! - **Encryption**: PBKDF2-HMAC-SHA256 + AES-256-CBC with a fresh salt and IV per backup
//! - **Retention**: the backup directory never holds more than `max_backups` files
//! - **Migration**: old backups are upgraded section by section on restore
//!
//! ## Example
//!
//! ```ignore
//! use cfb::infrastructure::{ConfigLoader, init_app};
//! use std::collections::HashMap;
//!
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let record = context.backup_service().create_backup(HashMap::new()).await?;
//! println!("{}", record.timestamp());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Backup record, payloads, errors and capability ports
//! - `application` - Codecs, migration engine and backup orchestrator
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `cli` - Command line front end

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cfb_domain::*;
}

/// Application layer - codecs and backup orchestration
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cfb_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cfb_infrastructure::*;
}

/// Command line front end
pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use cli::{Cli, run};
