//! Crypto Providers
//!
//! | Provider | Port | Backing crate |
//! |----------|------|---------------|
//! | [`OsSecureRandom`] | `SecureRandomSource` | `rand` (OS entropy) |
//! | [`Pbkdf2Sha256KeyDerivation`] | `KeyDerivationProvider` | `pbkdf2` + `sha2` |
//! | [`AesCbcCipher`] | `CipherProvider` | `aes` + `cbc` |

mod cipher;
mod kdf;
mod random;

pub use cipher::AesCbcCipher;
pub use kdf::Pbkdf2Sha256KeyDerivation;
pub use random::OsSecureRandom;
