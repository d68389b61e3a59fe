//! AES-256-CBC cipher with PKCS#7 padding

use crate::constants::{AES_256_KEY_SIZE, AES_BLOCK_SIZE, CIPHER_NAME_AES_256_CBC};
use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cfb_domain::error::{Error, Result};
use cfb_domain::ports::providers::CipherProvider;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256 in CBC mode
///
/// CBC carries no authentication tag: a wrong key usually surfaces as a
/// padding error, but not always, so callers must also validate the
/// decrypted content.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCbcCipher;

impl AesCbcCipher {
    /// Create a new AES-256-CBC cipher
    pub fn new() -> Self {
        Self
    }

    fn check_lengths(key: &[u8], iv: &[u8]) -> Result<()> {
        if key.len() != AES_256_KEY_SIZE {
            return Err(Error::invalid_argument(format!(
                "Invalid key size: expected {AES_256_KEY_SIZE} bytes, got {}",
                key.len()
            )));
        }
        if iv.len() != AES_BLOCK_SIZE {
            return Err(Error::invalid_argument(format!(
                "Invalid IV size: expected {AES_BLOCK_SIZE} bytes, got {}",
                iv.len()
            )));
        }
        Ok(())
    }
}

impl CipherProvider for AesCbcCipher {
    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Self::check_lengths(key, iv)?;
        let encryptor = Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|e| Error::infrastructure(format!("Cipher initialization failed: {e}")))?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        Self::check_lengths(key, iv)?;
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(Error::infrastructure(
                "Ciphertext is not a whole number of blocks",
            ));
        }
        let decryptor = Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|e| Error::infrastructure(format!("Cipher initialization failed: {e}")))?;
        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::infrastructure("Decryption failed: invalid padding"))
    }

    fn provider_name(&self) -> &str {
        CIPHER_NAME_AES_256_CBC
    }
}
