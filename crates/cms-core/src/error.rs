//! Domain-level error types.

use thiserror::Error;

/// Domain errors - raised at the application boundary before storage is hit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),
}

impl From<DomainError> for RepoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => RepoError::NotFound,
            other => RepoError::Validation(other.to_string()),
        }
    }
}
