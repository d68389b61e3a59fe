//! Backup record entity

use crate::value_objects::{BackupFormat, ConfigSection, generate_filename};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Immutable snapshot of configuration sections
///
/// A record is identified by its timestamp, which is truncated to
/// microseconds so that the file name derived from it maps back to the
/// same instant. Any subset of sections may be absent; an empty record is
/// legal but carries nothing to restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    timestamp: DateTime<Utc>,
    schema_version: u32,
    #[serde(default)]
    app_config: Option<Value>,
    #[serde(default)]
    platform_config: Option<Value>,
    #[serde(default)]
    work_config: Option<Value>,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

impl BackupRecord {
    /// Create a record without sections
    pub fn new(
        timestamp: DateTime<Utc>,
        schema_version: u32,
        metadata: HashMap<String, String>,
    ) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(6),
            schema_version,
            app_config: None,
            platform_config: None,
            work_config: None,
            metadata,
        }
    }

    /// Return the record with `section` set to `document`
    pub fn with_section(mut self, section: ConfigSection, document: Option<Value>) -> Self {
        *self.slot(section) = document;
        self
    }

    fn slot(&mut self, section: ConfigSection) -> &mut Option<Value> {
        match section {
            ConfigSection::App => &mut self.app_config,
            ConfigSection::Platform => &mut self.platform_config,
            ConfigSection::Work => &mut self.work_config,
        }
    }

    /// Creation instant
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Schema version of the embedded sections
    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// Caller-supplied annotations
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Document stored for a section, if captured
    pub fn section(&self, section: ConfigSection) -> Option<&Value> {
        match section {
            ConfigSection::App => self.app_config.as_ref(),
            ConfigSection::Platform => self.platform_config.as_ref(),
            ConfigSection::Work => self.work_config.as_ref(),
        }
    }

    /// Application section
    pub fn app_config(&self) -> Option<&Value> {
        self.app_config.as_ref()
    }

    /// Platform section
    pub fn platform_config(&self) -> Option<&Value> {
        self.platform_config.as_ref()
    }

    /// Work section
    pub fn work_config(&self) -> Option<&Value> {
        self.work_config.as_ref()
    }

    /// Sections present in this record, in restore order
    pub fn present_sections(&self) -> Vec<ConfigSection> {
        ConfigSection::ALL
            .into_iter()
            .filter(|s| self.section(*s).is_some())
            .collect()
    }

    /// True when no section was captured
    pub fn is_empty(&self) -> bool {
        self.present_sections().is_empty()
    }

    /// File name of this record for the given format
    pub fn filename(&self, format: BackupFormat) -> String {
        generate_filename(&self.timestamp, format)
    }
}
