//! Core error type definitions

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Drink identifier not present in the catalog
    #[error("unknown drink: {0}")]
    UnknownDrink(String),

    /// Selection store I/O error
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Selection store serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Core operation result type
pub type Result<T> = std::result::Result<T, CoreError>;
