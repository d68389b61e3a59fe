//! Backup Codecs
//!
//! | Codec | Description |
//! |-------|-------------|
//! | [`BackupCompression`] | Deterministic gzip + base64 |
//! | [`BackupEncryption`] | PBKDF2 + AES-256-CBC with fresh salt/IV |
//! | [`BackupPipeline`] | Fixed compress-then-encrypt ordering per [`BackupFormat`](cfb_domain::BackupFormat) |

mod compression;
mod encryption;
mod pipeline;

pub use compression::BackupCompression;
pub use encryption::BackupEncryption;
pub use pipeline::BackupPipeline;
