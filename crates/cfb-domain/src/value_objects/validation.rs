//! Validation report returned by configuration store writers

use serde::{Deserialize, Serialize};

/// Structured validity report for a section write
///
/// Stores never fail for ordinary invalid input; they return `valid = false`
/// with field-level messages instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the section was accepted
    pub valid: bool,
    /// Field-level messages, empty when valid
    #[serde(default)]
    pub messages: Vec<String>,
}

impl ValidationResult {
    /// Accepted section
    pub fn ok() -> Self {
        Self {
            valid: true,
            messages: Vec::new(),
        }
    }

    /// Rejected section with messages
    pub fn invalid<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: false,
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a result from collected messages (valid when none)
    pub fn from_messages(messages: Vec<String>) -> Self {
        Self {
            valid: messages.is_empty(),
            messages,
        }
    }
}
