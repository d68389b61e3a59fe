//! Encryption codec
//!
//! Password-based encryption of backup records. A fresh salt and IV come
//! from the [`SecureRandomSource`] on every call, the key is derived with
//! PBKDF2-HMAC-SHA256 and the record is sealed with AES-256-CBC/PKCS#7.
//! The primitives are injected so the codec is written once for every
//! platform.
//!
//! Every decryption failure collapses into [`Error::security`]; callers
//! cannot distinguish a wrong password from a corrupt payload.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use cfb_domain::constants::{
    ENCRYPTION_IV_SIZE, ENCRYPTION_KEY_SIZE, ENCRYPTION_SALT_SIZE, PBKDF2_ITERATIONS,
};
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::providers::{CipherProvider, KeyDerivationProvider, SecureRandomSource};
use cfb_domain::{BackupRecord, EncryptedPayload};
use std::sync::Arc;
use zeroize::Zeroizing;

/// Password-based codec for backup records
#[derive(Clone)]
pub struct BackupEncryption {
    random: Arc<dyn SecureRandomSource>,
    kdf: Arc<dyn KeyDerivationProvider>,
    cipher: Arc<dyn CipherProvider>,
}

impl BackupEncryption {
    /// Create a codec from platform primitives
    pub fn new(
        random: Arc<dyn SecureRandomSource>,
        kdf: Arc<dyn KeyDerivationProvider>,
        cipher: Arc<dyn CipherProvider>,
    ) -> Self {
        Self {
            random,
            kdf,
            cipher,
        }
    }

    /// Encrypt a record with `password`
    pub fn encrypt(&self, record: &BackupRecord, password: &str) -> Result<EncryptedPayload> {
        let json = Zeroizing::new(serde_json::to_vec(record)?);
        self.encrypt_bytes(&json, password)
    }

    /// Decrypt a payload produced by [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, payload: &EncryptedPayload, password: &str) -> Result<BackupRecord> {
        let plaintext = self.decrypt_bytes(payload, password)?;
        serde_json::from_slice(&plaintext).map_err(|_| Error::security())
    }

    /// Encrypt arbitrary bytes with `password`
    pub fn encrypt_bytes(&self, plaintext: &[u8], password: &str) -> Result<EncryptedPayload> {
        if password.is_empty() {
            return Err(Error::invalid_argument("Backup password cannot be empty"));
        }

        let salt = self.random.random_bytes(ENCRYPTION_SALT_SIZE)?;
        let iv = self.random.random_bytes(ENCRYPTION_IV_SIZE)?;
        let key = self.derive_key(password, &salt)?;
        let ciphertext = self.cipher.encrypt(&key, &iv, plaintext)?;

        Ok(EncryptedPayload::new(
            BASE64.encode(ciphertext),
            BASE64.encode(salt),
            BASE64.encode(iv),
        ))
    }

    /// Decrypt a payload back to raw bytes
    pub fn decrypt_bytes(&self, payload: &EncryptedPayload, password: &str) -> Result<Vec<u8>> {
        let (ciphertext, salt, iv) = decode_fields(payload).ok_or_else(Error::security)?;
        let key = self
            .derive_key(password, &salt)
            .map_err(|_| Error::security())?;
        let plaintext = self
            .cipher
            .decrypt(&key, &iv, &ciphertext)
            .map_err(|_| Error::security())?;
        Ok(plaintext)
    }

    /// Name of the cipher backing this codec
    pub fn cipher_name(&self) -> &str {
        self.cipher.provider_name()
    }

    fn derive_key(&self, password: &str, salt: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        self.kdf
            .derive_key(password, salt, PBKDF2_ITERATIONS, ENCRYPTION_KEY_SIZE)
            .map(Zeroizing::new)
    }
}

/// Decode the three base64 fields, checking salt and IV sizes
fn decode_fields(payload: &EncryptedPayload) -> Option<(Vec<u8>, Vec<u8>, Vec<u8>)> {
    let ciphertext = BASE64.decode(payload.data.as_bytes()).ok()?;
    let salt = BASE64.decode(payload.salt.as_bytes()).ok()?;
    let iv = BASE64.decode(payload.iv.as_bytes()).ok()?;
    if ciphertext.is_empty() || salt.len() != ENCRYPTION_SALT_SIZE || iv.len() != ENCRYPTION_IV_SIZE
    {
        return None;
    }
    Some((ciphertext, salt, iv))
}
