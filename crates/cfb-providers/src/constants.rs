//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in cfb-domain) and infrastructure constants.

// ============================================================================
// CRYPTO PROVIDER CONSTANTS
// ============================================================================

/// Provider name reported by the AES-CBC cipher
pub const CIPHER_NAME_AES_256_CBC: &str = "aes-256-cbc";

/// Provider name reported by the PBKDF2 key derivation
pub const KDF_NAME_PBKDF2_SHA256: &str = "pbkdf2-hmac-sha256";

/// AES block size in bytes (also the CBC IV size)
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 key size in bytes
pub const AES_256_KEY_SIZE: usize = 32;

// ============================================================================
// FILE STORE CONSTANTS
// ============================================================================

/// Prefix of in-flight temporary files; listing ignores them
pub const TEMP_FILE_PREFIX: &str = ".";

/// Suffix of in-flight temporary files
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

// ============================================================================
// CONFIGURATION STORE CONSTANTS
// ============================================================================

/// Extension of section documents in the JSON configuration store
pub const SECTION_FILE_EXTENSION: &str = "json";

/// Accepted values of `app.theme`
pub const APP_THEMES: [&str; 3] = ["dark", "light", "system"];

/// Accepted values of `app.units`
pub const APP_UNITS: [&str; 2] = ["metric", "imperial"];
