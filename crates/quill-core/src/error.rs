//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Service errors - the failure taxonomy of the post operations.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Post not found: {id}")]
    NotFound { id: Uuid },

    #[error("Only the post owner may perform this action")]
    Unauthorized,

    #[error("Owners cannot like their own post")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
