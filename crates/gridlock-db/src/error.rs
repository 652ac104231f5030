//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur against the document store.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Document not found.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// A write batch exceeded the per-commit bound.
    #[error("Batch of {writes} writes exceeds the per-commit limit of {limit}")]
    BatchTooLarge { writes: usize, limit: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
