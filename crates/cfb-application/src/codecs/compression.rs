//! Compression codec
//!
//! Serializes a backup record to JSON, gzips it at a fixed level and wraps
//! the result in standard base64 so it can be stored as text. The gzip
//! header carries no timestamp, so identical records always produce
//! identical payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use cfb_domain::error::{Error, Result};
use cfb_domain::{BackupRecord, CompressedPayload};
use flate2::Compression;
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Deterministic gzip + base64 codec for backup records
pub struct BackupCompression;

impl BackupCompression {
    /// Compress a record into a printable payload
    pub fn compress(record: &BackupRecord) -> Result<CompressedPayload> {
        let json = serde_json::to_vec(record)?;
        Self::compress_bytes(&json)
    }

    /// Restore a record from a payload produced by [`compress`](Self::compress)
    pub fn decompress(payload: &CompressedPayload) -> Result<BackupRecord> {
        let json = Self::decompress_bytes(payload)?;
        serde_json::from_slice(&json).map_err(|e| {
            Error::compression(format!("Decompressed data is not a backup record: {e}"))
        })
    }

    /// Compress arbitrary bytes into a printable payload
    pub fn compress_bytes(bytes: &[u8]) -> Result<CompressedPayload> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(bytes)
            .map_err(|e| Error::compression(format!("Failed to compress backup: {e}")))?;
        let compressed = encoder
            .finish()
            .map_err(|e| Error::compression(format!("Failed to finish compression: {e}")))?;
        Ok(CompressedPayload::new(BASE64.encode(compressed)))
    }

    /// Recover the raw bytes of a payload
    ///
    /// Fails on malformed base64, an empty stream, a gzip stream whose
    /// checksum or length trailer does not match, or bytes left over after
    /// the gzip member.
    pub fn decompress_bytes(payload: &CompressedPayload) -> Result<Vec<u8>> {
        let compressed = BASE64
            .decode(payload.data.as_bytes())
            .map_err(|e| Error::compression(format!("Invalid payload encoding: {e}")))?;
        if compressed.is_empty() {
            return Err(Error::compression("Compressed payload is empty"));
        }

        let mut decoder = GzDecoder::new(compressed.as_slice());
        let mut out = Vec::new();
        decoder
            .read_to_end(&mut out)
            .map_err(|e| Error::compression(format!("Corrupt compressed stream: {e}")))?;
        if !decoder.into_inner().is_empty() {
            return Err(Error::compression("Trailing data after compressed stream"));
        }
        Ok(out)
    }
}
