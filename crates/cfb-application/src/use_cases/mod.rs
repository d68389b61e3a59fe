//! Use Cases
//!
//! Application services implementing the domain service interfaces.

/// Backup orchestration
pub mod backup_service;

pub use backup_service::BackupServiceImpl;
