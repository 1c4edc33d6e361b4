//! Error types for the forecast_window crate

use thiserror::Error;

/// Custom error types for the forecast_window crate
#[derive(Debug, Error)]
pub enum WindowError {
    /// A time range failed one of its construction checks
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A date string did not match any accepted layout
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Date arithmetic left the representable calendar range
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// Error from reading or writing settings as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, WindowError>;
