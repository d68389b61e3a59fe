//! In-memory configuration store
//!
//! Keeps section documents in a concurrent map and validates writes with
//! the same rules as the file-backed store. Reads of chosen sections can
//! be made to fail and writes can be forced to be rejected, which is how
//! tests reach the partial-backup and skipped-section paths.

use super::validate_section;
use async_trait::async_trait;
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::infrastructure::ConfigurationStore;
use cfb_domain::{ConfigSection, ValidationResult};
use dashmap::DashMap;
use serde_json::Value;

/// Configuration sections held in memory
#[derive(Debug, Default)]
pub struct InMemoryConfigurationStore {
    sections: DashMap<ConfigSection, Value>,
    read_failures: DashMap<ConfigSection, String>,
    rejections: DashMap<ConfigSection, Vec<String>>,
}

impl InMemoryConfigurationStore {
    /// Create an empty store; reading any section fails until it is set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a section directly, bypassing validation
    pub fn set(&self, section: ConfigSection, document: Value) {
        self.sections.insert(section, document);
    }

    /// Current document of `section`
    pub fn get(&self, section: ConfigSection) -> Option<Value> {
        self.sections.get(&section).map(|entry| entry.value().clone())
    }

    /// Make reads of `section` fail with `message`
    pub fn fail_reads(&self, section: ConfigSection, message: impl Into<String>) {
        self.read_failures.insert(section, message.into());
    }

    /// Reject every write of `section` with `messages`
    pub fn reject_writes<I, S>(&self, section: ConfigSection, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejections
            .insert(section, messages.into_iter().map(Into::into).collect());
    }

    /// Remove all injected failures
    pub fn clear_failures(&self) {
        self.read_failures.clear();
        self.rejections.clear();
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigurationStore {
    async fn read_section(&self, section: ConfigSection) -> Result<Value> {
        if let Some(message) = self.read_failures.get(&section) {
            return Err(Error::store_read(section, message.value().clone()));
        }
        self.get(section)
            .ok_or_else(|| Error::store_read(section, "section has never been written"))
    }

    async fn write_section(
        &self,
        section: ConfigSection,
        document: Value,
    ) -> Result<ValidationResult> {
        if let Some(messages) = self.rejections.get(&section) {
            return Ok(ValidationResult::invalid(messages.value().clone()));
        }
        let validation = validate_section(section, &document);
        if validation.valid {
            self.sections.insert(section, document);
        }
        Ok(validation)
    }
}
