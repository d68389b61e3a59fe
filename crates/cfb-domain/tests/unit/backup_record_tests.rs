//! Tests for the backup record entity

use cfb_domain::constants::CURRENT_SCHEMA_VERSION;
use cfb_domain::{BackupFormat, BackupRecord, ConfigSection};
use chrono::{TimeZone, Timelike, Utc};
use serde_json::json;
use std::collections::HashMap;

fn sample_record() -> BackupRecord {
    let ts = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
    let metadata = HashMap::from([("reason".to_string(), "manual".to_string())]);
    BackupRecord::new(ts, CURRENT_SCHEMA_VERSION, metadata)
        .with_section(ConfigSection::App, Some(json!({"language": "en"})))
        .with_section(ConfigSection::Work, Some(json!({"timezone": "UTC"})))
}

#[test]
fn test_record_exposes_sections() {
    let record = sample_record();
    assert_eq!(record.app_config(), Some(&json!({"language": "en"})));
    assert!(record.platform_config().is_none());
    assert_eq!(record.work_config(), Some(&json!({"timezone": "UTC"})));
    assert_eq!(
        record.present_sections(),
        vec![ConfigSection::App, ConfigSection::Work]
    );
    assert!(!record.is_empty());
    assert_eq!(record.metadata().get("reason").map(String::as_str), Some("manual"));
}

#[test]
fn test_empty_record_is_legal() {
    let record = BackupRecord::new(Utc::now(), CURRENT_SCHEMA_VERSION, HashMap::new());
    assert!(record.is_empty());
}

#[test]
fn test_timestamp_truncated_to_microseconds() {
    let ts = Utc
        .with_ymd_and_hms(2026, 10, 19, 8, 15, 30)
        .unwrap()
        .with_nanosecond(123_456_789)
        .unwrap();
    let record = BackupRecord::new(ts, 1, HashMap::new());
    assert_eq!(record.timestamp().nanosecond(), 123_456_000);
}

#[test]
fn test_record_json_uses_camel_case_fields() {
    let value = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(value["schemaVersion"], json!(CURRENT_SCHEMA_VERSION));
    assert_eq!(value["appConfig"]["language"], json!("en"));
    assert!(value["platformConfig"].is_null());
    assert_eq!(value["metadata"]["reason"], json!("manual"));
}

#[test]
fn test_record_deserializes_without_optional_fields() {
    let record: BackupRecord =
        serde_json::from_value(json!({"timestamp": "2026-10-19T08:15:30Z", "schemaVersion": 1}))
            .unwrap();
    assert_eq!(record.schema_version(), 1);
    assert!(record.is_empty());
    assert!(record.metadata().is_empty());
}

#[test]
fn test_record_filename_matches_format() {
    let record = sample_record();
    assert_eq!(
        record.filename(BackupFormat::Plain),
        "config_2026-10-19T08-15-30.000000Z.backup.json"
    );
}
