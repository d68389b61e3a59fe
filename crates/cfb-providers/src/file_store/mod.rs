//! Backup File Stores
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`LocalBackupFileStore`] | One directory on disk, atomic temp-file + rename writes |
//! | [`InMemoryBackupFileStore`] | Concurrent map, with failure injection for tests |

mod local;
mod memory;

pub use local::LocalBackupFileStore;
pub use memory::InMemoryBackupFileStore;
