//! Backup Service Use Case
//!
//! Captures configuration sections into backup records, stores them through
//! the [`BackupFileStore`], enforces the retention cap and restores records
//! back into the [`ConfigurationStore`].
//!
//! The backup directory is the only index. Directory mutation (create +
//! prune, delete, delete-all) is serialized by a mutex owned by the
//! service, so one instance behaves as a single writer.

use crate::codecs::BackupPipeline;
use crate::domain_services::{BackupServiceInterface, SchemaMigrator};
use async_trait::async_trait;
use cfb_domain::constants::{CURRENT_SCHEMA_VERSION, MAX_BACKUPS};
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::infrastructure::{BackupFileStore, ConfigurationStore};
use cfb_domain::{
    BackupFormat, BackupRecord, ConfigSection, RestoreReport, SkippedSection, generate_filename,
    parse_filename,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Backup orchestrator
pub struct BackupServiceImpl {
    store: Arc<dyn ConfigurationStore>,
    files: Arc<dyn BackupFileStore>,
    pipeline: BackupPipeline,
    max_backups: usize,
    write_lock: Mutex<()>,
}

impl BackupServiceImpl {
    /// Create a service keeping at most [`MAX_BACKUPS`] files
    pub fn new(
        store: Arc<dyn ConfigurationStore>,
        files: Arc<dyn BackupFileStore>,
        pipeline: BackupPipeline,
    ) -> Self {
        Self {
            store,
            files,
            pipeline,
            max_backups: MAX_BACKUPS,
            write_lock: Mutex::new(()),
        }
    }

    /// Override the retention cap (at least one backup is always kept)
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups.max(1);
        self
    }

    /// Retention cap in effect
    pub fn max_backups(&self) -> usize {
        self.max_backups
    }

    /// Read every section, recording unreadable ones as absent
    async fn capture(&self, metadata: HashMap<String, String>) -> BackupRecord {
        let mut record = BackupRecord::new(Utc::now(), CURRENT_SCHEMA_VERSION, metadata);
        for section in ConfigSection::ALL {
            let document = match self.store.read_section(section).await {
                Ok(document) => Some(document),
                Err(e) => {
                    warn!(section = %section, error = %e, "Section unavailable, backing up without it");
                    None
                }
            };
            record = record.with_section(section, document);
        }
        record
    }

    async fn encode(&self, record: &BackupRecord) -> Result<Vec<u8>> {
        let pipeline = self.pipeline.clone();
        let record = record.clone();
        tokio::task::spawn_blocking(move || pipeline.encode(&record))
            .await
            .map_err(|e| Error::internal(format!("Backup encode task failed: {e}")))?
    }

    async fn decode(&self, format: BackupFormat, bytes: Vec<u8>) -> Result<BackupRecord> {
        let pipeline = self.pipeline.clone();
        tokio::task::spawn_blocking(move || pipeline.decode(format, &bytes))
            .await
            .map_err(|e| Error::internal(format!("Backup decode task failed: {e}")))?
    }

    /// Read and decode one backup file
    ///
    /// A file whose content disagrees with its name is treated as foreign.
    async fn load(&self, name: &str) -> Result<BackupRecord> {
        let (timestamp, format) = parse_filename(name)
            .ok_or_else(|| Error::invalid_argument(format!("Not a backup file: {name}")))?;
        let bytes = self.files.read(name).await?;
        let record = self.decode(format, bytes).await?;
        if record.timestamp() != timestamp {
            return Err(Error::invalid_argument(format!(
                "Backup {name} contains a record taken at {}",
                record.timestamp()
            )));
        }
        Ok(record)
    }

    /// Migrate one section and write it to the store
    ///
    /// `Migration` and `Validation` errors only concern this section; any
    /// other error is a storage failure.
    async fn restore_section(
        &self,
        section: ConfigSection,
        document: Value,
        from_version: u32,
    ) -> Result<()> {
        let migrated = SchemaMigrator::migrate_section(section, document, from_version)?;
        let validation = self.store.write_section(section, migrated).await?;
        if validation.valid {
            Ok(())
        } else {
            Err(Error::validation(section, validation.messages))
        }
    }

    /// Recognised backup files with their timestamps
    async fn backup_files(&self) -> Result<Vec<(DateTime<Utc>, String)>> {
        let names = self.files.list().await?;
        Ok(names
            .into_iter()
            .filter_map(|name| parse_filename(&name).map(|(timestamp, _)| (timestamp, name)))
            .collect())
    }

    /// Delete everything beyond the newest `max_backups` files
    ///
    /// Failures are logged and swallowed so a successful creation is never
    /// reported as failed because of retention.
    async fn prune(&self) {
        let mut backups = match self.backup_files().await {
            Ok(backups) => backups,
            Err(e) => {
                warn!(location = %self.files.location(), error = %e, "Skipping retention pruning");
                return;
            }
        };
        backups.sort_by(|a, b| b.0.cmp(&a.0));

        let mut failed = 0usize;
        for (_, name) in backups.iter().skip(self.max_backups) {
            match self.files.delete(name).await {
                Ok(()) => debug!(file = %name, "Pruned old backup"),
                Err(e) => {
                    failed += 1;
                    warn!(file = %name, error = %e, "Failed to prune old backup");
                }
            }
        }
        if failed > 0 {
            warn!(
                count = failed,
                max_backups = self.max_backups,
                "Some old backups could not be pruned"
            );
        }
    }
}

#[async_trait]
impl BackupServiceInterface for BackupServiceImpl {
    async fn create_backup(&self, metadata: HashMap<String, String>) -> Result<BackupRecord> {
        let record = self.capture(metadata).await;
        if record.is_empty() {
            warn!("No configuration section could be read; writing an empty backup");
        }

        let bytes = self.encode(&record).await?;
        let name = record.filename(self.pipeline.format());

        let _guard = self.write_lock.lock().await;
        if let Err(e) = self.files.write_atomic(&name, &bytes).await {
            warn!(file = %name, error = %e, "Failed to write backup");
            return Err(e);
        }
        info!(
            file = %name,
            sections = ?record.present_sections(),
            format = %self.pipeline.format(),
            "Backup created"
        );
        self.prune().await;

        Ok(record)
    }

    async fn list_backups(&self) -> Vec<BackupRecord> {
        let names = match self.files.list().await {
            Ok(names) => names,
            Err(e) => {
                warn!(location = %self.files.location(), error = %e, "Failed to list backups");
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for name in names.iter().filter(|n| parse_filename(n).is_some()) {
            match self.load(name).await {
                Ok(record) => records.push(record),
                Err(e) => debug!(file = %name, error = %e, "Skipping unreadable backup"),
            }
        }
        records.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        records
    }

    async fn find_backup(&self, timestamp: DateTime<Utc>) -> Option<BackupRecord> {
        let names = self.files.list().await.ok()?;
        for format in BackupFormat::ALL {
            let name = generate_filename(&timestamp, format);
            if names.contains(&name) {
                match self.load(&name).await {
                    Ok(record) => return Some(record),
                    Err(e) => debug!(file = %name, error = %e, "Skipping unreadable backup"),
                }
            }
        }
        None
    }

    async fn restore_backup(&self, record: &BackupRecord) -> Result<RestoreReport> {
        let from_version = record.schema_version();
        SchemaMigrator::ensure_supported(from_version)?;
        if record.is_empty() {
            return Err(Error::NoUsableData);
        }

        let mut report = RestoreReport::new(from_version, CURRENT_SCHEMA_VERSION);
        for section in record.present_sections() {
            let Some(document) = record.section(section).cloned() else {
                continue;
            };

            match self.restore_section(section, document, from_version).await {
                Ok(()) => {
                    debug!(section = %section, "Section restored");
                    report.restored.push(section);
                }
                Err(Error::Validation { messages, .. }) => {
                    warn!(section = %section, reasons = ?messages, "Skipping section rejected by the store");
                    report.skipped.push(SkippedSection {
                        section,
                        reasons: messages,
                    });
                }
                Err(e @ Error::Migration { .. }) => {
                    warn!(section = %section, error = %e, "Skipping section that cannot be migrated");
                    report.skipped.push(SkippedSection {
                        section,
                        reasons: vec![e.to_string()],
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            timestamp = %record.timestamp(),
            from_version,
            restored = report.restored.len(),
            skipped = report.skipped.len(),
            "Backup restored"
        );
        Ok(report)
    }

    async fn restore_latest(&self) -> Result<Option<RestoreReport>> {
        match self.list_backups().await.first() {
            Some(record) => self.restore_backup(record).await.map(Some),
            None => Ok(None),
        }
    }

    async fn delete_backup(&self, record: &BackupRecord) -> bool {
        let _guard = self.write_lock.lock().await;

        let names = match self.backup_files().await {
            Ok(backups) => backups
                .into_iter()
                .filter(|(timestamp, _)| *timestamp == record.timestamp())
                .map(|(_, name)| name)
                .collect(),
            Err(e) => {
                warn!(error = %e, "Failed to list backups, deleting by configured format");
                vec![record.filename(self.pipeline.format())]
            }
        };
        if names.is_empty() {
            debug!(timestamp = %record.timestamp(), "No backup file to delete");
            return false;
        }

        let mut deleted = true;
        for name in names {
            match self.files.delete(&name).await {
                Ok(()) => info!(file = %name, "Backup deleted"),
                Err(e) => {
                    warn!(file = %name, error = %e, "Failed to delete backup");
                    deleted = false;
                }
            }
        }
        deleted
    }

    async fn delete_all_backups(&self) -> usize {
        let _guard = self.write_lock.lock().await;

        let backups = match self.backup_files().await {
            Ok(backups) => backups,
            Err(e) => {
                warn!(location = %self.files.location(), error = %e, "Failed to list backups");
                return 0;
            }
        };

        let mut deleted = 0usize;
        for (_, name) in backups {
            match self.files.delete(&name).await {
                Ok(()) => deleted += 1,
                Err(e) => warn!(file = %name, error = %e, "Failed to delete backup"),
            }
        }
        info!(count = deleted, "Deleted all backups");
        deleted
    }

    fn format(&self) -> BackupFormat {
        self.pipeline.format()
    }
}
