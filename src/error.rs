//! Custom error types for saldo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for saldo operations
#[derive(Error, Debug)]
pub enum SaldoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input (recovered locally, no write performed)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ledger database errors (create/read/write failures)
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SaldoError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SaldoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for SaldoError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for SaldoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for saldo operations
pub type SaldoResult<T> = Result<T, SaldoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaldoError::Validation("amount must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "Validation error: amount must be greater than 0"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let saldo_err: SaldoError = io_err.into();
        assert!(matches!(saldo_err, SaldoError::Io(_)));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let db_err = rusqlite::Error::InvalidQuery;
        let saldo_err: SaldoError = db_err.into();
        assert!(saldo_err.is_storage());
    }
}
