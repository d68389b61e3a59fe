//! Backup domain service interface

use async_trait::async_trait;
use cfb_domain::error::Result;
use cfb_domain::{BackupFormat, BackupRecord, RestoreReport};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Backup orchestration operations exposed to schedulers, settings screens
/// and restore wizards
#[async_trait]
pub trait BackupServiceInterface: Send + Sync {
    /// Capture the current configuration, write it and prune old backups
    ///
    /// Unreadable sections are captured as absent. Fails only when the
    /// backup could not be encoded or written.
    async fn create_backup(&self, metadata: HashMap<String, String>) -> Result<BackupRecord>;

    /// Every decodable backup, newest first; unreadable files are skipped
    async fn list_backups(&self) -> Vec<BackupRecord>;

    /// Backup taken at `timestamp`, if one is stored and decodable
    async fn find_backup(&self, timestamp: DateTime<Utc>) -> Option<BackupRecord>;

    /// Migrate and write every section of `record` into the configuration store
    ///
    /// Sections rejected by migration or validation are skipped and listed in
    /// the report. `Err` means the restore could not complete.
    async fn restore_backup(&self, record: &BackupRecord) -> Result<RestoreReport>;

    /// Restore the newest decodable backup, `None` when there is none
    async fn restore_latest(&self) -> Result<Option<RestoreReport>>;

    /// Delete the file(s) of `record`; false on any failure
    async fn delete_backup(&self, record: &BackupRecord) -> bool;

    /// Delete every backup file, returning how many were removed
    async fn delete_all_backups(&self) -> usize;

    /// Format used for new backups
    fn format(&self) -> BackupFormat;
}
