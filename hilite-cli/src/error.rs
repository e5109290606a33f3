//! Error handling module for the hilite CLI.
//!
//! The lexer and renderer cannot fail; everything here comes from file
//! access, configuration and argument validation.

use thiserror::Error;

/// Main error type for the hilite CLI application.
#[derive(Error, Debug)]
pub enum HiliteError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a file cannot be read or written as requested.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes with failures.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using HiliteError.
pub type Result<T> = std::result::Result<T, HiliteError>;
