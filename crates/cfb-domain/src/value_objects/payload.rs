//! Transport-shaped payloads produced by the backup codecs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compressed serialized backup record
///
/// Carries no metadata of its own; version and timestamp are only
/// recoverable after decompression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedPayload {
    /// Base64 of the gzip-compressed record
    pub data: String,
}

impl CompressedPayload {
    /// Wrap already-encoded data
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Password-encrypted backup payload
///
/// All three fields are base64. `salt` and `iv` decode to 16 bytes each and
/// are fresh for every encryption.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    /// Base64 AES-256-CBC ciphertext
    pub data: String,
    /// Base64 PBKDF2 salt
    pub salt: String,
    /// Base64 initialization vector
    pub iv: String,
}

impl EncryptedPayload {
    /// Create a new encrypted payload container
    pub fn new(data: impl Into<String>, salt: impl Into<String>, iv: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            salt: salt.into(),
            iv: iv.into(),
        }
    }
}

impl fmt::Debug for EncryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EncryptedPayload {{ data: {} chars, salt: {} chars, iv: {} chars }}",
            self.data.len(),
            self.salt.len(),
            self.iv.len()
        )
    }
}
