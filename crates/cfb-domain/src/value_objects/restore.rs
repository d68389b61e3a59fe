//! Outcome of a restore operation

use super::ConfigSection;
use serde::{Deserialize, Serialize};

/// A section that was present in the backup but not applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSection {
    /// Section that was skipped
    pub section: ConfigSection,
    /// Migration or validation messages explaining the skip
    pub reasons: Vec<String>,
}

/// Per-section result of restoring a backup
///
/// Returned only when the restore completed without a hard failure; a
/// section rejected by validation is recorded here rather than aborting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestoreReport {
    /// Schema version declared by the backup
    pub from_version: u32,
    /// Schema version the sections were migrated to
    pub to_version: u32,
    /// Sections written to the configuration store
    pub restored: Vec<ConfigSection>,
    /// Sections that were present but skipped
    pub skipped: Vec<SkippedSection>,
}

impl RestoreReport {
    /// Start a report for a migration between two versions
    pub fn new(from_version: u32, to_version: u32) -> Self {
        Self {
            from_version,
            to_version,
            ..Self::default()
        }
    }

    /// True when every present section was restored
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// True when the given section was written to the store
    pub fn was_restored(&self, section: ConfigSection) -> bool {
        self.restored.contains(&section)
    }
}
