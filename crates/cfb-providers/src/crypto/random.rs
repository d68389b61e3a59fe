//! Operating system random source

use cfb_domain::error::{Error, Result};
use cfb_domain::ports::providers::SecureRandomSource;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Random bytes straight from the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecureRandom;

impl OsSecureRandom {
    /// Create a new OS random source
    pub fn new() -> Self {
        Self
    }
}

impl SecureRandomSource for OsSecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::infrastructure(format!("OS random source failed: {e}")))
    }
}
