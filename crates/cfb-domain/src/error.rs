//! Error handling types

use crate::value_objects::ConfigSection;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed message for every decryption failure.
///
/// Wrong passwords, tampered salts and corrupt ciphertexts all surface the same
/// text so callers cannot tell which one happened.
pub const SECURITY_FAILURE_MESSAGE: &str = "Unable to decrypt backup payload";

/// Main error type for CFB
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// A configuration section could not be read from the store
    #[error("Failed to read {section} section: {message}")]
    StoreRead {
        /// Section that failed
        section: ConfigSection,
        /// Description of the failure
        message: String,
    },

    /// Corrupt or truncated compressed payload
    #[error("Compression error: {message}")]
    Compression {
        /// Description of the compression error
        message: String,
    },

    /// Decryption or key derivation failure
    #[error("Security error: {message}")]
    Security {
        /// Always [`SECURITY_FAILURE_MESSAGE`] for decryption failures
        message: String,
    },

    /// A restored section was rejected by the configuration store
    ///
    /// Recovered per section during restore and reported in the restore report.
    #[error("Validation failed for {section} section: {}", messages.join("; "))]
    Validation {
        /// Section that failed validation
        section: ConfigSection,
        /// Field-level messages reported by the store
        messages: Vec<String>,
    },

    /// Schema migration could not be applied
    #[error("Migration error: {message}")]
    Migration {
        /// Description of the migration error
        message: String,
    },

    /// A restore was requested for a backup without any section
    #[error("Backup contains no usable configuration data")]
    NoUsableData,

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Codec error creation methods
impl Error {
    /// Create a compression error
    pub fn compression<S: Into<String>>(message: S) -> Self {
        Self::Compression {
            message: message.into(),
        }
    }

    /// Create the opaque decryption error
    pub fn security() -> Self {
        Self::Security {
            message: SECURITY_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Create a migration error
    pub fn migration<S: Into<String>>(message: S) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }
}

// Configuration store error creation methods
impl Error {
    /// Create a store read error for a section
    pub fn store_read<S: Into<String>>(section: ConfigSection, message: S) -> Self {
        Self::StoreRead {
            section,
            message: message.into(),
        }
    }

    /// Create a validation error for a section
    pub fn validation(section: ConfigSection, messages: Vec<String>) -> Self {
        Self::Validation { section, messages }
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal and infrastructure error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// Classification helpers for callers that report failures to users
//
// "no usable data", "corrupted or tampered data" and "storage failure" are
// disjoint: at most one of the three holds for any error.
impl Error {
    /// True when a backup was readable but held nothing to restore
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoUsableData)
    }

    /// True when the failure is caused by corrupted or tampered data
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Compression { .. }
                | Self::Security { .. }
                | Self::Json { .. }
                | Self::Migration { .. }
        )
    }

    /// True when the failure comes from the storage layer
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
