//! Application Bootstrap
//!
//! Composition root: turns an [`AppConfig`] into a ready backup service by
//! wiring the platform adapters from `cfb-providers` into the codecs and
//! orchestrator from `cfb-application`.
//!
//! ```text
//! AppConfig → crypto adapters → BackupEncryption ─┐
//!           → format/password ─────────────────→ BackupPipeline ─┐
//!           → LocalBackupFileStore ──────────────────────────────┼→ BackupServiceImpl
//!           → JsonFileConfigurationStore ────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let record = context.backup_service().create_backup(HashMap::new()).await?;
//! ```

use crate::config::AppConfig;
use cfb_application::{BackupEncryption, BackupPipeline, BackupServiceImpl, BackupServiceInterface};
use cfb_domain::error::Result;
use cfb_domain::ports::infrastructure::{BackupFileStore, ConfigurationStore};
use cfb_providers::{
    AesCbcCipher, JsonFileConfigurationStore, LocalBackupFileStore, OsSecureRandom,
    Pbkdf2Sha256KeyDerivation,
};
use std::sync::Arc;
use tracing::info;

/// Application context holding the configured services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    backup_service: Arc<dyn BackupServiceInterface>,
    configuration_store: Arc<dyn ConfigurationStore>,
}

impl AppContext {
    /// Backup orchestrator
    pub fn backup_service(&self) -> Arc<dyn BackupServiceInterface> {
        Arc::clone(&self.backup_service)
    }

    /// Live configuration store the service backs up and restores into
    pub fn configuration_store(&self) -> Arc<dyn ConfigurationStore> {
        Arc::clone(&self.configuration_store)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("format", &self.backup_service.format())
            .finish_non_exhaustive()
    }
}

/// Encryption codec backed by the OS random source, PBKDF2 and AES-CBC
pub fn default_encryption() -> BackupEncryption {
    BackupEncryption::new(
        Arc::new(OsSecureRandom::new()),
        Arc::new(Pbkdf2Sha256KeyDerivation::new()),
        Arc::new(AesCbcCipher::new()),
    )
}

/// Initialize the application with the on-disk stores named by `config`
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let store = Arc::new(JsonFileConfigurationStore::new(&config.store.directory));
    let files = Arc::new(LocalBackupFileStore::new(&config.backup.directory));
    init_app_with_stores(config, store, files).await
}

/// Initialize the application over caller-supplied stores
pub async fn init_app_with_stores(
    config: AppConfig,
    store: Arc<dyn ConfigurationStore>,
    files: Arc<dyn BackupFileStore>,
) -> Result<AppContext> {
    info!("Initializing backup service");

    let pipeline = BackupPipeline::new(
        config.backup.format,
        Some(default_encryption()),
        config.backup.password.clone(),
    )?;

    let backup_service = BackupServiceImpl::new(Arc::clone(&store), Arc::clone(&files), pipeline)
        .with_max_backups(config.backup.max_backups);

    info!(
        format = %config.backup.format,
        max_backups = backup_service.max_backups(),
        location = %files.location(),
        "Backup service ready"
    );

    Ok(AppContext {
        config: Arc::new(config),
        backup_service: Arc::new(backup_service),
        configuration_store: store,
    })
}
