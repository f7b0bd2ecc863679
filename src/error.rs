//! Error types for hyperpage
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Only caller misuse is an error in the pagination core. Empty pages and
//! missing stable positions are valid data, never errors.

use thiserror::Error;

/// The main error type for hyperpage
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Dataset Errors
    // ============================================================================
    #[error("CSV parsing error at line {line}: {message}")]
    CsvParse { line: usize, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a CSV parse error
    pub fn csv_parse(line: usize, message: impl Into<String>) -> Self {
        Self::CsvParse {
            line,
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Result type alias for hyperpage
pub type Result<T> = std::result::Result<T, Error>;
