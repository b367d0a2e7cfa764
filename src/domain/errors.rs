//! Domain error types
//!
//! This module defines the error hierarchy for kb-migrate.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Result alias using [`MigrateError`]
pub type Result<T> = std::result::Result<T, MigrateError>;

/// Main kb-migrate error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A raw record could not be converted into an article
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MigrateError {
    fn from(err: serde_json::Error) -> Self {
        MigrateError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_error_display() {
        let err = MigrateError::Configuration("Invalid log level".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid log level");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MigrateError = io_err.into();
        assert!(matches!(err, MigrateError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MigrateError = json_err.into();
        assert!(matches!(err, MigrateError::Serialization(_)));
    }

    #[test]
    fn test_migrate_error_implements_std_error() {
        let err = MigrateError::InvalidRecord("not an object".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
