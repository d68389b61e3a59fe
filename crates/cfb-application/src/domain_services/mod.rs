//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`BackupServiceInterface`] | Backup orchestration contract |
//! | [`SchemaMigrator`] | Versioned configuration migrations |

/// Backup orchestration interface
pub mod backup;
/// Schema migration engine
pub mod migration;

pub use backup::BackupServiceInterface;
pub use migration::{SchemaMigrator, format_compact_duration};
