//! Configuration sections captured by a backup

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the configuration domains a backup can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSection {
    /// Application-wide preferences
    App,
    /// Platform integration settings (widgets, push, location)
    Platform,
    /// Work and alerting settings
    Work,
}

impl ConfigSection {
    /// Every section, in capture and restore order
    pub const ALL: [ConfigSection; 3] = [Self::App, Self::Platform, Self::Work];

    /// Lowercase identifier used in logs and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Platform => "platform",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
