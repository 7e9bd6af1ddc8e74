//! Domain-level error types.

use thiserror::Error;

/// Domain errors - lookup failures surfaced to callers.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The identifier is not in the store's identifier format.
    #[error("Invalid ID {id}. {entity_type} not found")]
    InvalidId { entity_type: &'static str, id: String },

    #[error("{entity_type} with ID {id} not found")]
    NotFound { entity_type: &'static str, id: String },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// A stored document does not have the expected shape.
    #[error("Document decoding failed: {0}")]
    Decode(String),
}
