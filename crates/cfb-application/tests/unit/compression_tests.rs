//! Tests for the compression codec

use cfb_application::BackupCompression;
use cfb_domain::{BackupRecord, CompressedPayload, ConfigSection, Error};
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::collections::HashMap;

fn sample_record() -> BackupRecord {
    let timestamp = Utc
        .with_ymd_and_hms(2026, 3, 14, 15, 9, 26)
        .single()
        .expect("valid date");
    let metadata = HashMap::from([("trigger".to_string(), "manual".to_string())]);
    BackupRecord::new(timestamp, 3, metadata)
        .with_section(
            ConfigSection::App,
            Some(json!({ "theme": "dark", "refreshInterval": "15m", "language": "en" })),
        )
        .with_section(
            ConfigSection::Work,
            Some(json!({ "alertWindow": "1h", "escalationMinutes": 30 })),
        )
}

#[test]
fn test_compress_round_trip() {
    let record = sample_record();
    let payload = BackupCompression::compress(&record).expect("compress");
    let restored = BackupCompression::decompress(&payload).expect("decompress");

    assert_eq!(restored, record);
    assert!(restored.platform_config().is_none());
}

#[test]
fn test_compress_is_deterministic() {
    let record = sample_record();
    let first = BackupCompression::compress(&record).expect("compress");
    let second = BackupCompression::compress(&record).expect("compress");

    assert_eq!(first.data, second.data);
}

#[test]
fn test_truncated_payload_is_rejected() {
    let payload = BackupCompression::compress(&sample_record()).expect("compress");
    let cut = payload.data.len() - 8;
    let truncated = CompressedPayload::new(&payload.data[..cut]);

    match BackupCompression::decompress(&truncated) {
        Err(Error::Compression { .. }) => {}
        other => panic!("Expected Compression error, got {other:?}"),
    }
}

#[test]
fn test_malformed_base64_is_rejected() {
    let payload = CompressedPayload::new("not base64 at all!");
    match BackupCompression::decompress(&payload) {
        Err(e) => assert!(e.is_data_error()),
        Ok(_) => panic!("Expected Compression error"),
    }
}

#[test]
fn test_empty_payload_is_rejected() {
    assert!(matches!(
        BackupCompression::decompress(&CompressedPayload::new("")),
        Err(Error::Compression { .. })
    ));
}

#[test]
fn test_non_record_content_is_rejected() {
    let payload = BackupCompression::compress_bytes(b"[1, 2, 3]").expect("compress");
    assert_eq!(
        BackupCompression::decompress_bytes(&payload).expect("bytes"),
        b"[1, 2, 3]"
    );
    assert!(matches!(
        BackupCompression::decompress(&payload),
        Err(Error::Compression { .. })
    ));
}

const BASE64_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

fn record_with_entries(count: usize) -> BackupRecord {
    let metadata = (0..count)
        .map(|i| (format!("key{i}"), format!("value-{}", i * 7919)))
        .collect();
    BackupRecord::new(Utc::now(), 3, metadata)
        .with_section(ConfigSection::App, Some(json!({ "theme": "system" })))
}

/// One payload per base64 tail shape: no padding, `=` and `==`
fn payloads_for_every_padding() -> [CompressedPayload; 3] {
    let mut found: [Option<CompressedPayload>; 3] = [None, None, None];
    for count in 0..64 {
        let payload = BackupCompression::compress(&record_with_entries(count)).expect("compress");
        let padding = payload.data.chars().rev().take_while(|c| *c == '=').count();
        if found[padding].is_none() {
            found[padding] = Some(payload);
        }
    }
    found.map(|payload| payload.expect("payload for every padding length"))
}

#[test]
fn test_replacing_last_character_is_rejected() {
    for payload in payloads_for_every_padding() {
        let (head, last) = payload.data.split_at(payload.data.len() - 1);
        for replacement in BASE64_ALPHABET.chars().filter(|c| c.to_string() != last) {
            let tampered = CompressedPayload::new(format!("{head}{replacement}"));
            match BackupCompression::decompress(&tampered) {
                Err(Error::Compression { .. }) => {}
                other => panic!(
                    "Expected Compression error for tail {last}->{replacement}, got {other:?}"
                ),
            }
        }
    }
}

#[test]
fn test_trailing_bytes_after_stream_are_rejected() {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    let payload = BackupCompression::compress(&sample_record()).expect("compress");
    let mut bytes = STANDARD.decode(&payload.data).expect("base64");
    bytes.push(0);
    let padded = CompressedPayload::new(STANDARD.encode(bytes));

    match BackupCompression::decompress(&padded) {
        Err(Error::Compression { message }) => assert!(message.contains("Trailing data")),
        other => panic!("Expected Compression error, got {other:?}"),
    }
}
