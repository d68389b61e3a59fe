//! Backup file naming
//!
//! One file per backup record, named from the record's timestamp. The
//! extension identifies which codecs produced the file content.

use crate::constants::{
    BACKUP_EXTENSION_COMPRESSED, BACKUP_EXTENSION_COMPRESSED_ENCRYPTED,
    BACKUP_EXTENSION_ENCRYPTED, BACKUP_EXTENSION_PLAIN, BACKUP_FILE_PREFIX,
    FILENAME_SAFE_SEPARATOR,
};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the bytes stored in a backup file
///
/// Compression always precedes encryption when both are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFormat {
    /// Serialized backup record
    Plain,
    /// Serialized compressed payload
    #[default]
    Compressed,
    /// Serialized encrypted payload over the record
    Encrypted,
    /// Serialized encrypted payload over a serialized compressed payload
    CompressedEncrypted,
}

impl BackupFormat {
    /// Every format, longest extension first
    pub const ALL: [BackupFormat; 4] = [
        Self::CompressedEncrypted,
        Self::Compressed,
        Self::Encrypted,
        Self::Plain,
    ];

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Plain => BACKUP_EXTENSION_PLAIN,
            Self::Compressed => BACKUP_EXTENSION_COMPRESSED,
            Self::Encrypted => BACKUP_EXTENSION_ENCRYPTED,
            Self::CompressedEncrypted => BACKUP_EXTENSION_COMPRESSED_ENCRYPTED,
        }
    }

    /// Whether the content goes through the compression codec
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed | Self::CompressedEncrypted)
    }

    /// Whether the content goes through the encryption codec
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted | Self::CompressedEncrypted)
    }

    /// Configuration identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Compressed => "compressed",
            Self::Encrypted => "encrypted",
            Self::CompressedEncrypted => "compressed_encrypted",
        }
    }
}

impl fmt::Display for BackupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp layout used inside file names once colons are replaced
const FILENAME_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S%.fZ";

/// Build the file name for a backup taken at `timestamp`
///
/// The RFC 3339 form (microseconds, `Z` suffix) has its colons replaced so
/// the name is safe on every filesystem.
pub fn generate_filename(timestamp: &DateTime<Utc>, format: BackupFormat) -> String {
    let stamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Micros, true)
        .replace(':', &FILENAME_SAFE_SEPARATOR.to_string());
    format!("{BACKUP_FILE_PREFIX}{stamp}{}", format.extension())
}

/// Recover timestamp and format from a backup file name
///
/// Returns `None` for names this subsystem did not produce.
pub fn parse_filename(name: &str) -> Option<(DateTime<Utc>, BackupFormat)> {
    let rest = name.strip_prefix(BACKUP_FILE_PREFIX)?;
    BackupFormat::ALL.iter().find_map(|format| {
        let stamp = rest.strip_suffix(format.extension())?;
        let naive = NaiveDateTime::parse_from_str(stamp, FILENAME_TIMESTAMP_FORMAT).ok()?;
        Some((Utc.from_utc_datetime(&naive), *format))
    })
}
