//! Backup File Store Port
//!
//! The backup directory is the durable index: every file it contains is one
//! backup. Names passed to the store are bare file names, never paths.

use crate::error::Result;
use async_trait::async_trait;

/// Storage for backup files
///
/// # Example
///
/// ```no_run
/// use cfb_domain::ports::infrastructure::BackupFileStore;
///
/// async fn count(store: &dyn BackupFileStore) -> cfb_domain::Result<usize> {
///     Ok(store.list().await?.len())
/// }
/// ```
#[async_trait]
pub trait BackupFileStore: Send + Sync {
    /// Write `bytes` under a new `name` so that readers never observe a partial file
    ///
    /// Fails without touching the stored file when `name` already exists.
    async fn write_atomic(&self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Read the full content of `name`
    async fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Names of all files currently stored
    async fn list(&self) -> Result<Vec<String>>;

    /// Delete `name`; deleting a missing file is an error
    async fn delete(&self, name: &str) -> Result<()>;

    /// Human-readable location for logs
    fn location(&self) -> String;
}
