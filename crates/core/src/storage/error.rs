use thiserror::Error;

use crate::todo::ShapeError;

/// Failures reported by a row source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("Query returned no rows")]
    NoRows,
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
