//! Command line interface
//!
//! Parses arguments with clap, loads configuration and logging, and runs
//! one backup command against the service built by the bootstrap.
//! Command output goes to stdout; logs go to stderr.

use anyhow::{Context, Result, anyhow, bail};
use cfb_application::BackupServiceInterface;
use cfb_domain::{BackupRecord, ConfigSection, RestoreReport, parse_filename};
use cfb_infrastructure::config::ConfigLoader;
use cfb_infrastructure::logging::init_logging;
use cfb_infrastructure::{AppContext, init_app};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// Command line interface for CFB
#[derive(Parser, Debug)]
#[command(name = "cfb")]
#[command(about = "CFB - Configuration backup, restore and retention")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Backup commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Back up the current configuration
    Create {
        /// Metadata attached to the backup
        #[arg(long = "meta", value_name = "KEY=VALUE", value_parser = parse_metadata)]
        metadata: Vec<(String, String)>,
    },

    /// List stored backups, newest first
    List,

    /// Restore a backup into the configuration store
    Restore {
        /// Backup timestamp (RFC 3339) or backup file name
        #[arg(value_name = "TIMESTAMP", required_unless_present = "latest", conflicts_with = "latest", value_parser = parse_timestamp)]
        timestamp: Option<DateTime<Utc>>,

        /// Restore the newest readable backup
        #[arg(long)]
        latest: bool,
    },

    /// Delete one backup
    Delete {
        /// Backup timestamp (RFC 3339) or backup file name
        #[arg(value_name = "TIMESTAMP", value_parser = parse_timestamp)]
        timestamp: DateTime<Utc>,
    },

    /// Delete every backup
    DeleteAll,
}

/// Parse `KEY=VALUE`
pub fn parse_metadata(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Parse an RFC 3339 timestamp or a backup file name
///
/// Backups are named at microsecond precision, so finer digits are dropped.
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc).trunc_subsecs(6));
    }
    parse_filename(raw)
        .map(|(timestamp, _)| timestamp)
        .ok_or_else(|| {
            format!("'{raw}' is neither an RFC 3339 timestamp nor a backup file name")
        })
}

/// Load configuration, initialize logging and run the selected command
pub async fn run(cli: Cli) -> Result<()> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    let context = init_app(config).await?;
    let mut stdout = std::io::stdout().lock();
    execute(&context, cli.command, &mut stdout).await
}

/// Run one command against an initialized application
pub async fn execute<W: Write>(context: &AppContext, command: Command, out: &mut W) -> Result<()> {
    let service = context.backup_service();
    match command {
        Command::Create { metadata } => {
            let metadata: HashMap<String, String> = metadata.into_iter().collect();
            let record = service.create_backup(metadata).await?;
            writeln!(out, "Created {}", record.filename(service.format()))?;
            if record.is_empty() {
                writeln!(out, "Warning: no configuration section could be read")?;
            }
        }
        Command::List => {
            let records = service.list_backups().await;
            if records.is_empty() {
                writeln!(out, "No backups")?;
            }
            for record in &records {
                writeln!(out, "{}", describe(record))?;
            }
        }
        Command::Restore { timestamp, latest } => {
            let report = match (timestamp, latest) {
                (_, true) => service
                    .restore_latest()
                    .await?
                    .ok_or_else(|| anyhow!("No readable backup to restore"))?,
                (Some(timestamp), false) => {
                    let record = find(service.as_ref(), timestamp).await?;
                    service.restore_backup(&record).await?
                }
                (None, false) => bail!("Give a backup timestamp or --latest"),
            };
            print_report(out, &report)?;
        }
        Command::Delete { timestamp } => {
            let record = find(service.as_ref(), timestamp).await?;
            if !service.delete_backup(&record).await {
                bail!("Failed to delete backup {}", format_timestamp(&timestamp));
            }
            writeln!(out, "Deleted backup {}", format_timestamp(&timestamp))?;
        }
        Command::DeleteAll => {
            let count = service.delete_all_backups().await;
            writeln!(out, "Deleted {count} backup(s)")?;
        }
    }
    Ok(())
}

async fn find(
    service: &dyn BackupServiceInterface,
    timestamp: DateTime<Utc>,
) -> Result<BackupRecord> {
    service
        .find_backup(timestamp)
        .await
        .ok_or_else(|| anyhow!("No readable backup at {}", format_timestamp(&timestamp)))
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// One line per backup: timestamp, schema version, sections, metadata
fn describe(record: &BackupRecord) -> String {
    let sections: Vec<&str> = record
        .present_sections()
        .iter()
        .map(ConfigSection::as_str)
        .collect();
    let mut metadata: Vec<String> = record
        .metadata()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    metadata.sort();

    let sections = if sections.is_empty() {
        "-".to_string()
    } else {
        sections.join(",")
    };
    format!(
        "{}  v{}  {}  {}",
        format_timestamp(&record.timestamp()),
        record.schema_version(),
        sections,
        metadata.join(" ")
    )
    .trim_end()
    .to_string()
}

fn print_report<W: Write>(out: &mut W, report: &RestoreReport) -> Result<()> {
    for section in &report.restored {
        writeln!(out, "Restored {section}")?;
    }
    for skipped in &report.skipped {
        writeln!(
            out,
            "Skipped {}: {}",
            skipped.section,
            skipped.reasons.join("; ")
        )?;
    }
    if report.from_version != report.to_version {
        writeln!(
            out,
            "Migrated from schema v{} to v{}",
            report.from_version, report.to_version
        )?;
    }
    Ok(())
}
