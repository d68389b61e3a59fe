//! JSON file configuration store
//!
//! Each section lives in its own document (`app.json`, `platform.json`,
//! `work.json`) inside one configuration directory. Writes are validated
//! first and then replace the file atomically.

use super::validate_section;
use crate::constants::{SECTION_FILE_EXTENSION, TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use async_trait::async_trait;
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::infrastructure::ConfigurationStore;
use cfb_domain::{ConfigSection, ValidationResult};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Configuration sections stored as JSON files
#[derive(Debug, Clone)]
pub struct JsonFileConfigurationStore {
    directory: PathBuf,
}

impl JsonFileConfigurationStore {
    /// Create a store over `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory holding the section documents
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the document for `section`
    pub fn section_path(&self, section: ConfigSection) -> PathBuf {
        self.directory
            .join(format!("{}.{SECTION_FILE_EXTENSION}", section.as_str()))
    }
}

#[async_trait]
impl ConfigurationStore for JsonFileConfigurationStore {
    async fn read_section(&self, section: ConfigSection) -> Result<Value> {
        let path = self.section_path(section);
        let bytes = fs::read(&path).await.map_err(|e| {
            Error::store_read(section, format!("cannot read {}: {e}", path.display()))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::store_read(section, format!("{} is not valid JSON: {e}", path.display()))
        })
    }

    async fn write_section(
        &self,
        section: ConfigSection,
        document: Value,
    ) -> Result<ValidationResult> {
        let validation = validate_section(section, &document);
        if !validation.valid {
            return Ok(validation);
        }

        fs::create_dir_all(&self.directory).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to create {}", self.directory.display()),
                e,
            )
        })?;

        let path = self.section_path(section);
        let temp = self.directory.join(format!(
            "{TEMP_FILE_PREFIX}{}.{SECTION_FILE_EXTENSION}{TEMP_FILE_SUFFIX}",
            section.as_str()
        ));
        let bytes = serde_json::to_vec_pretty(&document)?;
        fs::write(&temp, &bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", temp.display()), e)
        })?;
        fs::rename(&temp, &path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to replace {}", path.display()), e)
        })?;

        debug!(section = %section, path = %path.display(), "Section written");
        Ok(validation)
    }
}
