//! Error types for session storage

use thiserror::Error;

/// Session store error types
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid data or location
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for session store operations
pub type Result<T> = std::result::Result<T, Error>;
