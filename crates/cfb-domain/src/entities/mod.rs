//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`BackupRecord`] | Immutable configuration snapshot |

/// Backup record entity
pub mod backup;

pub use backup::BackupRecord;
