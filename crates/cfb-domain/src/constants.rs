//! Domain layer constants
//!
//! Contains constants that are part of the backup domain and are shared by
//! the application and provider layers. Infrastructure-specific constants
//! remain in `cfb_infrastructure::constants`.

// ============================================================================
// RETENTION CONSTANTS
// ============================================================================

/// Maximum number of backup files kept after a successful creation
pub const MAX_BACKUPS: usize = 5;

// ============================================================================
// SCHEMA CONSTANTS
// ============================================================================

/// Schema version produced by the current configuration layout
pub const CURRENT_SCHEMA_VERSION: u32 = 3;

/// Oldest schema version the migration engine can upgrade from
pub const MIN_SUPPORTED_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// BACKUP FILE CONSTANTS
// ============================================================================

/// Prefix shared by every backup file name
pub const BACKUP_FILE_PREFIX: &str = "config_";

/// Extension of plain JSON backups
pub const BACKUP_EXTENSION_PLAIN: &str = ".backup.json";

/// Extension of compressed backups
pub const BACKUP_EXTENSION_COMPRESSED: &str = ".backup.gz.json";

/// Extension of encrypted backups
pub const BACKUP_EXTENSION_ENCRYPTED: &str = ".backup.enc.json";

/// Extension of compressed-then-encrypted backups
pub const BACKUP_EXTENSION_COMPRESSED_ENCRYPTED: &str = ".backup.gz.enc.json";

/// Replacement for characters that are unsafe in file names
pub const FILENAME_SAFE_SEPARATOR: char = '-';

// ============================================================================
// ENCRYPTION CONSTANTS
// ============================================================================

/// Salt length in bytes for key derivation
pub const ENCRYPTION_SALT_SIZE: usize = 16;

/// AES-CBC initialization vector length in bytes
pub const ENCRYPTION_IV_SIZE: usize = 16;

/// Derived key length in bytes (AES-256)
pub const ENCRYPTION_KEY_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count
pub const PBKDF2_ITERATIONS: u32 = 10_000;
