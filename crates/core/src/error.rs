//! Error types for droid-doctor
//!
//! Centralized error handling using thiserror. Validators never return
//! errors; failure states are data in their results. This type covers the
//! surrounding plumbing: configuration I/O and report serialization.

use thiserror::Error;

/// Main error type for droid-doctor
#[derive(Error, Debug)]
pub enum DoctorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for droid-doctor operations
pub type Result<T> = std::result::Result<T, DoctorError>;

impl DoctorError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DoctorError::Io(e) => format!("File operation failed: {}", e),
            DoctorError::Config(msg) => format!("Configuration error: {}", msg),
            _ => self.to_string(),
        }
    }
}
