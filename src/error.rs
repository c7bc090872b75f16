//! Error types for the Cobble utilities.

use thiserror::Error;

/// Main error type for Cobble operations.
#[derive(Error, Debug)]
pub enum CobbleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Color parse errors
    #[error("Invalid color '{0}': expected '#RRGGBB' or 'RRGGBB'")]
    Color(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Cobble operations.
pub type Result<T> = std::result::Result<T, CobbleError>;
