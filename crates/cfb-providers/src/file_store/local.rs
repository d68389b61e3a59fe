//! Local filesystem backup store
//!
//! Every backup is one file in a single directory. Writes go to a hidden
//! temporary file in the same directory and are renamed into place, so a
//! concurrent listing never sees a partially written backup. An existing
//! backup is never replaced. The directory is created lazily on first write.

use crate::constants::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use async_trait::async_trait;
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::infrastructure::BackupFileStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Backup directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalBackupFileStore {
    directory: PathBuf,
}

impl LocalBackupFileStore {
    /// Create a store rooted at `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the backups
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Resolve a bare file name inside the backup directory
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let is_bare = !name.is_empty()
            && Path::new(name).file_name().is_some_and(|n| n == name)
            && !name.starts_with(TEMP_FILE_PREFIX);
        if !is_bare {
            return Err(Error::invalid_argument(format!(
                "Invalid backup file name: {name}"
            )));
        }
        Ok(self.directory.join(name))
    }
}

#[async_trait]
impl BackupFileStore for LocalBackupFileStore {
    async fn write_atomic(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let target = self.path_for(name)?;
        fs::create_dir_all(&self.directory).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to create backup directory {}", self.directory.display()),
                e,
            )
        })?;

        let exists = fs::try_exists(&target).await.map_err(|e| {
            Error::io_with_source(format!("Failed to inspect {}", target.display()), e)
        })?;
        if exists {
            return Err(Error::io(format!(
                "Backup file {} already exists",
                target.display()
            )));
        }

        let temp = self
            .directory
            .join(format!("{TEMP_FILE_PREFIX}{name}{TEMP_FILE_SUFFIX}"));
        fs::write(&temp, bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", temp.display()), e)
        })?;

        if let Err(e) = fs::rename(&temp, &target).await {
            let _ = fs::remove_file(&temp).await;
            return Err(Error::io_with_source(
                format!("Failed to move backup into place at {}", target.display()),
                e,
            ));
        }

        debug!(file = %name, bytes = bytes.len(), "Backup file written");
        Ok(())
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        fs::read(&path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to read {}", path.display()), e))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut entries = match fs::read_dir(&self.directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to list {}", self.directory.display()),
                    e,
                ));
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            Error::io_with_source(format!("Failed to list {}", self.directory.display()), e)
        })? {
            let is_file = entry.file_type().await.is_ok_and(|t| t.is_file());
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if is_file && !name.starts_with(TEMP_FILE_PREFIX) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to delete {}", path.display()), e))
    }

    fn location(&self) -> String {
        self.directory.display().to_string()
    }
}
