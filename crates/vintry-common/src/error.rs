//! Error types for Vintry

use thiserror::Error;

/// Result type alias for Vintry operations
pub type Result<T> = std::result::Result<T, VintryError>;

/// Main error type for Vintry
#[derive(Error, Debug)]
pub enum VintryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
