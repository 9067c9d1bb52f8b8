//! Error types for the retheme library.
//!
//! Read and write failures abort a run, so most call sites simply propagate
//! these with `?`. Pattern mismatches in the rewritten sources are not errors
//! at all and never show up here.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Main result type for retheme operations.
pub type Result<T> = std::result::Result<T, RethemeError>;

/// Error type for all retheme operations.
#[derive(Error, Debug)]
pub enum RethemeError {
    /// I/O related errors (reading or writing a source file)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field that failed validation
        field: Option<String>,
    },

    /// A rewrite pattern built from configuration failed to compile
    #[error("Pattern error in '{pattern}': {message}")]
    Pattern {
        /// The offending pattern source
        pattern: String,
        /// Error description
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RethemeError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error that names the file involved
    pub fn io_at(action: &str, path: &Path, source: io::Error) -> Self {
        Self::io(format!("failed to {action} {}", path.display()), source)
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error naming the field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new pattern compilation error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for RethemeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = RethemeError::config("Invalid configuration");
        assert!(matches!(err, RethemeError::Config { .. }));

        let err = RethemeError::pattern("import \\{(", "unclosed group");
        assert_eq!(err.to_string(), "Pattern error in 'import \\{(': unclosed group");
    }

    #[test]
    fn test_io_at_names_the_path() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = RethemeError::io_at("write", Path::new("app/index.tsx"), io_err);

        if let RethemeError::Io { message, source } = &err {
            assert_eq!(message, "failed to write app/index.tsx");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("[unterminated").unwrap_err();
        let err: RethemeError = yaml_err.into();
        assert!(matches!(err, RethemeError::Serialization { source: Some(_), .. }));
    }

    #[test]
    fn test_validation_field_error() {
        let err = RethemeError::validation_field("must not be empty", "imports.symbol");

        if let RethemeError::Validation { message, field } = err {
            assert_eq!(message, "must not be empty");
            assert_eq!(field, Some("imports.symbol".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }
}
