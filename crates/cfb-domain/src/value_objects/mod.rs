//! Value Objects
//!
//! Immutable values without identity used across the backup subsystem.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ConfigSection`] | Configuration domain carried by a backup |
//! | [`BackupFormat`] | Codec layout of a backup file |
//! | [`CompressedPayload`] | Compressed record envelope |
//! | [`EncryptedPayload`] | Encrypted record envelope |
//! | [`ValidationResult`] | Store validity report |
//! | [`RestoreReport`] | Per-section restore outcome |

/// Backup file naming and formats
pub mod backup_file;
/// Codec payloads
pub mod payload;
/// Restore outcome
pub mod restore;
/// Configuration sections
pub mod section;
/// Store validation report
pub mod validation;

pub use backup_file::{BackupFormat, generate_filename, parse_filename};
pub use payload::{CompressedPayload, EncryptedPayload};
pub use restore::{RestoreReport, SkippedSection};
pub use section::ConfigSection;
pub use validation::ValidationResult;
