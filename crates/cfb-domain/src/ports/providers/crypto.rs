//! Cryptographic Capability Ports
//!
//! Primitives the encryption codec is written against. Each target platform
//! supplies its own adapter (secure random source, key derivation, cipher)
//! while the codec itself is defined once.
//!
//! ## Usage
//!
//! This port follows the Dependency Inversion Principle:
//! - The traits are defined here (cfb-domain)
//! - Implementations live in cfb-providers
//! - The codec depends on the abstraction, not the concrete implementation
//!
//! All methods are synchronous and CPU-bound; async callers run them on a
//! blocking thread.

use crate::error::Result;

/// Cryptographically secure source of random bytes
pub trait SecureRandomSource: Send + Sync {
    /// Fill `dest` with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;

    /// Allocate and fill a buffer of `len` random bytes
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}

/// Password-based key derivation
pub trait KeyDerivationProvider: Send + Sync {
    /// Derive `key_len` bytes from `password` and `salt`
    fn derive_key(
        &self,
        password: &str,
        salt: &[u8],
        iterations: u32,
        key_len: usize,
    ) -> Result<Vec<u8>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Symmetric block cipher with padding
///
/// # Example
///
/// ```ignore
/// use cfb_domain::ports::providers::CipherProvider;
///
/// fn seal(cipher: &dyn CipherProvider, key: &[u8], iv: &[u8]) -> cfb_domain::Result<Vec<u8>> {
///     cipher.encrypt(key, iv, b"{}")
/// }
/// ```
pub trait CipherProvider: Send + Sync {
    /// Encrypt plaintext with the given key and IV
    fn encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt ciphertext with the given key and IV
    ///
    /// Padding failures are errors; a wrong key almost always produces one.
    fn decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
