//! Configuration loading and validation tests
//!
//! Every test loads from an explicit file with a private environment prefix
//! so results do not depend on the developer's `CFB_*` variables.

use cfb_domain::{BackupFormat, Error};
use cfb_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader};
use cfb_infrastructure::constants::{DEFAULT_BACKUP_DIRECTORY, DEFAULT_LOG_LEVEL};
use std::path::PathBuf;
use tempfile::TempDir;

fn loader(dir: &TempDir, toml: &str) -> ConfigLoader {
    let path = dir.path().join("cfb.toml");
    std::fs::write(&path, toml).expect("write config");
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix("CFB_UNIT_TEST_UNSET")
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.backup.directory, PathBuf::from(DEFAULT_BACKUP_DIRECTORY));
    assert_eq!(config.backup.max_backups, 5);
    assert_eq!(config.backup.format, BackupFormat::Compressed);
    assert!(config.backup.password.is_none());
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_load_from_toml_file() {
    let dir = TempDir::new().expect("temp dir");
    let config = loader(
        &dir,
        r#"
[backup]
directory = "/var/lib/cfb/backups"
max_backups = 9
format = "plain"

[logging]
level = "debug"
json_format = true
"#,
    )
    .load()
    .expect("load");

    assert_eq!(config.backup.directory, PathBuf::from("/var/lib/cfb/backups"));
    assert_eq!(config.backup.max_backups, 9);
    assert_eq!(config.backup.format, BackupFormat::Plain);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    // untouched sections keep their defaults
    assert_eq!(config.store.directory, PathBuf::from("./config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("CFB_UNIT_TEST_UNSET")
        .load()
        .expect("load");

    assert_eq!(config.backup.format, BackupFormat::Compressed);
}

#[test]
fn test_encrypted_format_requires_password() {
    let dir = TempDir::new().expect("temp dir");
    let result = loader(&dir, "[backup]\nformat = \"compressed_encrypted\"\n").load();

    match result {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("password")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }

    let config = loader(
        &dir,
        "[backup]\nformat = \"encrypted\"\npassword = \"hunter2\"\n",
    )
    .load()
    .expect("load");
    assert_eq!(config.backup.format, BackupFormat::Encrypted);
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    assert!(loader(&dir, "[backup]\nmax_backups = 0\n").load().is_err());
    assert!(loader(&dir, "[logging]\nlevel = \"loud\"\n").load().is_err());
    assert!(loader(&dir, "[backup]\nformat = \"zip\"\n").load().is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("temp dir");
    let config = ConfigBuilder::new()
        .with_backup_directory(dir.path().join("backups"))
        .with_max_backups(3)
        .with_format(BackupFormat::Encrypted)
        .with_password("pw")
        .build()
        .expect("build");

    let path = dir.path().join("saved.toml");
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("CFB_UNIT_TEST_UNSET");
    loader.save_to_file(&config, &path).expect("save");
    let reloaded = loader.load().expect("reload");

    assert_eq!(reloaded.backup.max_backups, 3);
    assert_eq!(reloaded.backup.format, BackupFormat::Encrypted);
    assert_eq!(reloaded.backup.password.as_deref(), Some("pw"));
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_builder_validates() {
    assert!(ConfigBuilder::new().with_max_backups(0).build().is_err());
    assert!(
        ConfigBuilder::new()
            .with_format(BackupFormat::CompressedEncrypted)
            .build()
            .is_err()
    );
}

#[test]
fn test_debug_redacts_password() {
    let config = ConfigBuilder::new()
        .with_password("very-secret")
        .build()
        .expect("build");
    let debug = format!("{:?}", config.backup);

    assert!(!debug.contains("very-secret"));
    assert!(debug.contains("redacted"));
}
