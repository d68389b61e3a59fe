//! Infrastructure Provider Interfaces
//!
//! Storage-facing ports used by the backup orchestrator.

/// Live configuration store port
pub mod configuration_store;
/// Backup file storage port
pub mod file_store;

pub use configuration_store::ConfigurationStore;
pub use file_store::BackupFileStore;
