//! CLI Tests

use cfb::cli::{Cli, Command, execute, parse_metadata, parse_timestamp};
use cfb::domain::{BackupFormat, ConfigSection, generate_filename};
use cfb::infrastructure::AppContext;
use cfb::infrastructure::bootstrap::init_app_with_stores;
use cfb::infrastructure::config::ConfigBuilder;
use cfb_providers::{InMemoryBackupFileStore, InMemoryConfigurationStore};
use chrono::{TimeZone, Utc};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

async fn context() -> (AppContext, Arc<InMemoryConfigurationStore>, Arc<InMemoryBackupFileStore>) {
    let config = ConfigBuilder::new().build().expect("config");
    let store = Arc::new(InMemoryConfigurationStore::new());
    store.set(ConfigSection::App, json!({ "theme": "dark" }));
    let files = Arc::new(InMemoryBackupFileStore::new());
    let context = init_app_with_stores(config, store.clone(), files.clone())
        .await
        .expect("init");
    (context, store, files)
}

async fn run(context: &AppContext, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["cfb"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("parse");
    let mut out = Vec::new();
    execute(context, cli.command, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf8"))
}

#[test]
fn test_parse_create_with_metadata() {
    let cli = Cli::try_parse_from(["cfb", "create", "--meta", "reason=upgrade", "--meta", "by=ops"])
        .expect("parse");
    assert_eq!(
        cli.command,
        Command::Create {
            metadata: vec![
                ("reason".to_string(), "upgrade".to_string()),
                ("by".to_string(), "ops".to_string()),
            ]
        }
    );
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["cfb", "list", "--config", "/etc/cfb.toml"]).expect("parse");
    assert_eq!(cli.config, Some(PathBuf::from("/etc/cfb.toml")));
    assert_eq!(cli.command, Command::List);
}

#[test]
fn test_parse_restore_requires_timestamp_or_latest() {
    assert!(Cli::try_parse_from(["cfb", "restore"]).is_err());
    assert!(
        Cli::try_parse_from(["cfb", "restore", "2026-01-02T03:04:05Z", "--latest"]).is_err()
    );

    let cli = Cli::try_parse_from(["cfb", "restore", "--latest"]).expect("parse");
    assert_eq!(
        cli.command,
        Command::Restore {
            timestamp: None,
            latest: true
        }
    );
}

#[test]
fn test_parse_metadata_rejects_missing_key() {
    assert!(parse_metadata("novalue").is_err());
    assert!(parse_metadata("=value").is_err());
    assert_eq!(
        parse_metadata("note=a=b").expect("meta"),
        ("note".to_string(), "a=b".to_string())
    );
}

#[test]
fn test_parse_timestamp_accepts_rfc3339_and_filenames() {
    let expected = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("timestamp");

    assert_eq!(parse_timestamp("2026-01-02T03:04:05Z").expect("rfc3339"), expected);
    assert_eq!(
        parse_timestamp("2026-01-02T04:04:05+01:00").expect("offset"),
        expected
    );

    let name = generate_filename(&expected, BackupFormat::Encrypted);
    assert_eq!(parse_timestamp(&name).expect("filename"), expected);

    assert!(parse_timestamp("yesterday").is_err());
}

#[test]
fn test_parse_timestamp_drops_sub_microsecond_digits() {
    let expected = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("timestamp")
        + chrono::Duration::microseconds(123_456);

    assert_eq!(
        parse_timestamp("2026-01-02T03:04:05.123456789Z").expect("nanos"),
        expected
    );
}

#[tokio::test]
async fn test_restore_by_nanosecond_timestamp_finds_backup() {
    let (context, _store, _files) = context().await;
    let record = context
        .backup_service()
        .create_backup(Default::default())
        .await
        .expect("create");
    let precise = record
        .timestamp()
        .to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
        .replace("000Z", "999Z");

    let output = run(&context, &["restore", &precise]).await.expect("restore");
    assert!(output.contains("Restored app"));
}

#[tokio::test]
async fn test_create_and_list_commands() {
    let (context, _store, files) = context().await;

    let created = run(&context, &["create", "--meta", "reason=test"])
        .await
        .expect("create");
    assert!(created.starts_with("Created config_"));
    assert!(created.contains(".backup.gz.json"));
    assert_eq!(files.len(), 1);

    let listed = run(&context, &["list"]).await.expect("list");
    assert!(listed.contains("v3"));
    assert!(listed.contains("app"));
    assert!(listed.contains("reason=test"));
}

#[tokio::test]
async fn test_list_command_without_backups() {
    let (context, _store, _files) = context().await;
    assert_eq!(run(&context, &["list"]).await.expect("list"), "No backups\n");
}

#[tokio::test]
async fn test_restore_latest_command_rewrites_store() {
    let (context, store, _files) = context().await;
    run(&context, &["create"]).await.expect("create");
    store.set(ConfigSection::App, json!({ "theme": "light" }));

    let output = run(&context, &["restore", "--latest"]).await.expect("restore");
    assert!(output.contains("Restored app"));
    assert_eq!(
        store.get(ConfigSection::App),
        Some(json!({ "theme": "dark" }))
    );
}

#[tokio::test]
async fn test_restore_and_delete_unknown_timestamp_fail() {
    let (context, _store, _files) = context().await;

    assert!(run(&context, &["restore", "2020-01-01T00:00:00Z"]).await.is_err());
    assert!(run(&context, &["delete", "2020-01-01T00:00:00Z"]).await.is_err());
    assert!(run(&context, &["restore", "--latest"]).await.is_err());
}

#[tokio::test]
async fn test_delete_commands() {
    let (context, _store, files) = context().await;
    let record = context
        .backup_service()
        .create_backup(Default::default())
        .await
        .expect("create");
    let name = record.filename(BackupFormat::Compressed);

    let output = run(&context, &["delete", &name]).await.expect("delete");
    assert!(output.starts_with("Deleted backup"));
    assert!(files.is_empty());

    run(&context, &["create"]).await.expect("create");
    let output = run(&context, &["delete-all"]).await.expect("delete-all");
    assert_eq!(output, "Deleted 1 backup(s)\n");
    assert!(files.is_empty());
}
