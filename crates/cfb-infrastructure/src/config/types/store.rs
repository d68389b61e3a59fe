//! Configuration store location

use crate::constants::DEFAULT_STORE_DIRECTORY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the live configuration sections are kept
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding `app.json`, `platform.json` and `work.json`
    pub directory: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_STORE_DIRECTORY),
        }
    }
}
