//! Custom error types for the Rigel tax engine
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Rigel tax operations
#[derive(Error, Debug)]
pub enum RigelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for calculation inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Tax-year table lookup failures
    #[error("No tax table available for tax year {0}")]
    TaxTable(u16),

    /// Posting import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl RigelError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an import error for a specific CSV line
    pub fn import_line(line: usize, msg: impl Into<String>) -> Self {
        Self::Import(format!("line {}: {}", line, msg.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RigelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RigelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RigelError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for RigelError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for Rigel tax operations
pub type RigelResult<T> = Result<T, RigelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RigelError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_tax_table_error() {
        let err = RigelError::TaxTable(2031);
        assert_eq!(err.to_string(), "No tax table available for tax year 2031");
    }

    #[test]
    fn test_import_line_error() {
        let err = RigelError::import_line(7, "bad amount");
        assert_eq!(err.to_string(), "Import error: line 7: bad amount");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rigel_err: RigelError = io_err.into();
        assert!(matches!(rigel_err, RigelError::Io(_)));
    }
}
