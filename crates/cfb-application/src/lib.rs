//! Application Layer - CFB
//!
//! Backup codecs, schema migration and the backup orchestrator, written
//! once against the capability ports in `cfb-domain`.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains use case implementations (application services)
//! - Depends on ports, never on concrete adapters
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Modules
//!
//! - [`codecs`]: compression, encryption and the compress-then-encrypt pipeline
//! - [`domain_services`]: service interfaces and the migration engine
//! - [`use_cases`]: the backup orchestrator

pub mod codecs;
pub mod domain_services;
pub mod use_cases;

pub use codecs::{BackupCompression, BackupEncryption, BackupPipeline};
pub use domain_services::{BackupServiceInterface, SchemaMigrator, format_compact_duration};
pub use use_cases::BackupServiceImpl;
