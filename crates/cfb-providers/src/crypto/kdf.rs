//! PBKDF2 key derivation

use crate::constants::KDF_NAME_PBKDF2_SHA256;
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::providers::KeyDerivationProvider;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// PBKDF2 with HMAC-SHA256
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2Sha256KeyDerivation;

impl Pbkdf2Sha256KeyDerivation {
    /// Create a new PBKDF2-HMAC-SHA256 provider
    pub fn new() -> Self {
        Self
    }
}

impl KeyDerivationProvider for Pbkdf2Sha256KeyDerivation {
    fn derive_key(
        &self,
        password: &str,
        salt: &[u8],
        iterations: u32,
        key_len: usize,
    ) -> Result<Vec<u8>> {
        if iterations == 0 || key_len == 0 {
            return Err(Error::invalid_argument(
                "Key derivation needs at least one iteration and a non-empty key",
            ));
        }

        let mut key = vec![0u8; key_len];
        pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
        Ok(key)
    }

    fn provider_name(&self) -> &str {
        KDF_NAME_PBKDF2_SHA256
    }
}
