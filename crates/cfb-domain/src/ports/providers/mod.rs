//! External Provider Ports
//!
//! Capability interfaces implemented once per target platform.
//!
//! | Port | Description |
//! |------|-------------|
//! | SecureRandomSource | Cryptographically secure random bytes |
//! | KeyDerivationProvider | Password-based key derivation |
//! | CipherProvider | Symmetric encryption/decryption |

/// Crypto capability ports
pub mod crypto;

pub use crypto::{CipherProvider, KeyDerivationProvider, SecureRandomSource};
