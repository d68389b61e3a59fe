//! Domain Port Interfaces
//!
//! Ports are the boundaries between the backup core and its adapters.
//!
//! - [`providers`]: crypto capabilities supplied per platform
//! - [`infrastructure`]: backup file storage and the live configuration store

pub mod infrastructure;
pub mod providers;

pub use infrastructure::{BackupFileStore, ConfigurationStore};
pub use providers::{CipherProvider, KeyDerivationProvider, SecureRandomSource};
