//! In-memory backup store
//!
//! Holds backups in a concurrent map. Used by tests and by embedders that
//! keep backups elsewhere. Individual operations can be made to fail so
//! error paths of the orchestrator are reachable without a real disk.

use async_trait::async_trait;
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::infrastructure::BackupFileStore;
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use std::sync::atomic::{AtomicBool, Ordering};

/// Backup files held in memory
#[derive(Debug, Default)]
pub struct InMemoryBackupFileStore {
    files: DashMap<String, Vec<u8>>,
    failing_deletes: DashSet<String>,
    fail_list: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryBackupFileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw bytes under `name`, bypassing failure injection
    pub fn insert(&self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), bytes.into());
    }

    /// Raw bytes stored under `name`
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.get(name).map(|entry| entry.value().clone())
    }

    /// Whether `name` is stored
    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Make deleting `name` fail
    pub fn fail_delete_of(&self, name: impl Into<String>) {
        self.failing_deletes.insert(name.into());
    }

    /// Make `list` fail (or succeed again)
    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Make `write_atomic` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BackupFileStore for InMemoryBackupFileStore {
    async fn write_atomic(&self, name: &str, bytes: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::io(format!("Simulated write failure for {name}")));
        }
        match self.files.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Error::io(format!("Backup file {name} already exists"))),
            Entry::Vacant(slot) => {
                slot.insert(bytes.to_vec());
                Ok(())
            }
        }
    }

    async fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.get(name)
            .ok_or_else(|| Error::io(format!("No backup file named {name}")))
    }

    async fn list(&self) -> Result<Vec<String>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::io("Simulated list failure"));
        }
        let mut names: Vec<String> = self.files.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        if self.failing_deletes.contains(name) {
            return Err(Error::io(format!("Simulated delete failure for {name}")));
        }
        self.files
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::io(format!("No backup file named {name}")))
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
