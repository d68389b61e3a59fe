//! Configuration Store Port
//!
//! The configuration store owns the live configuration. This subsystem only
//! reads sections from it when capturing a backup and writes sections back
//! through its validating update when restoring.

use crate::error::Result;
use crate::value_objects::{ConfigSection, ValidationResult};
use async_trait::async_trait;
use serde_json::Value;

/// Source and sink of live configuration sections
///
/// Reads are independently fallible. Writes report ordinary invalid input
/// through [`ValidationResult`] and reserve `Err` for hard failures such as
/// I/O errors.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Read the current document for a section
    async fn read_section(&self, section: ConfigSection) -> Result<Value>;

    /// Validate and write a section document
    async fn write_section(&self, section: ConfigSection, document: Value)
    -> Result<ValidationResult>;

    /// Read the application section
    async fn read_app_section(&self) -> Result<Value> {
        self.read_section(ConfigSection::App).await
    }

    /// Read the platform section
    async fn read_platform_section(&self) -> Result<Value> {
        self.read_section(ConfigSection::Platform).await
    }

    /// Read the work section
    async fn read_work_section(&self) -> Result<Value> {
        self.read_section(ConfigSection::Work).await
    }

    /// Write the application section
    async fn write_app_section(&self, document: Value) -> Result<ValidationResult> {
        self.write_section(ConfigSection::App, document).await
    }

    /// Write the platform section
    async fn write_platform_section(&self, document: Value) -> Result<ValidationResult> {
        self.write_section(ConfigSection::Platform, document).await
    }

    /// Write the work section
    async fn write_work_section(&self, document: Value) -> Result<ValidationResult> {
        self.write_section(ConfigSection::Work, document).await
    }
}
