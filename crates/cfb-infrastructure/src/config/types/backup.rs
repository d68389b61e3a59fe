//! Backup configuration types

use crate::constants::DEFAULT_BACKUP_DIRECTORY;
use cfb_domain::BackupFormat;
use cfb_domain::constants::MAX_BACKUPS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Backup configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Backup directory
    pub directory: PathBuf,

    /// Maximum number of backups to keep
    pub max_backups: usize,

    /// Encoding of new backup files
    pub format: BackupFormat,

    /// Password for encrypted formats
    ///
    /// Prefer `CFB_BACKUP__PASSWORD` over writing it to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Returns default backup configuration with:
/// - Directory: ./backups
/// - Keep last 5 backups
/// - Compressed, unencrypted files
impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_BACKUP_DIRECTORY),
            max_backups: MAX_BACKUPS,
            format: BackupFormat::default(),
            password: None,
        }
    }
}

impl fmt::Debug for BackupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackupConfig")
            .field("directory", &self.directory)
            .field("max_backups", &self.max_backups)
            .field("format", &self.format)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
