//! # CFB - Provider Implementations
//!
//! Platform adapters for the ports defined in `cfb-domain`. The backup
//! codecs and orchestrator are written once against those ports; this
//! crate supplies the concrete capabilities for a desktop/server target.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Random | `SecureRandomSource` | OsSecureRandom |
//! | Key derivation | `KeyDerivationProvider` | Pbkdf2Sha256KeyDerivation |
//! | Cipher | `CipherProvider` | AesCbcCipher |
//! | Backup files | `BackupFileStore` | LocalBackupFileStore, InMemoryBackupFileStore |
//! | Configuration | `ConfigurationStore` | JsonFileConfigurationStore, InMemoryConfigurationStore |
//!
//! ## Usage
//!
//! ```ignore
//! use cfb_providers::crypto::{AesCbcCipher, OsSecureRandom, Pbkdf2Sha256KeyDerivation};
//! use cfb_providers::file_store::LocalBackupFileStore;
//! ```

// Re-export cfb-domain types commonly used with providers
pub use cfb_domain::error::{Error, Result};
pub use cfb_domain::ports::infrastructure::{BackupFileStore, ConfigurationStore};
pub use cfb_domain::ports::providers::{CipherProvider, KeyDerivationProvider, SecureRandomSource};

/// Provider-specific constants
pub mod constants;

/// Crypto primitive implementations
///
/// Implements `SecureRandomSource`, `KeyDerivationProvider` and `CipherProvider`.
pub mod crypto;

/// Backup file storage implementations
///
/// Implements `BackupFileStore` for the local filesystem and for tests.
pub mod file_store;

/// Configuration store implementations
///
/// Implements `ConfigurationStore` over JSON files and in memory.
pub mod config_store;

pub use config_store::{InMemoryConfigurationStore, JsonFileConfigurationStore};
pub use crypto::{AesCbcCipher, OsSecureRandom, Pbkdf2Sha256KeyDerivation};
pub use file_store::{InMemoryBackupFileStore, LocalBackupFileStore};
