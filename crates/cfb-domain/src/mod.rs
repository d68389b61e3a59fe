//! # CFB Domain
//!
//! Core types of the configuration backup subsystem: the immutable
//! [`BackupRecord`], codec payloads, the error taxonomy and the capability
//! ports that platform adapters implement.
//!
//! This crate has no I/O of its own.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::BackupRecord;
pub use error::{Error, Result};
pub use value_objects::{
    BackupFormat, CompressedPayload, ConfigSection, EncryptedPayload, RestoreReport,
    SkippedSection, ValidationResult, generate_filename, parse_filename,
};
