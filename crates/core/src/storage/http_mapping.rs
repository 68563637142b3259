//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use crate::todo::ShapeError;

use super::{DatabaseError, RepositoryError};

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `Shape(Mismatch)` -> 500 (a stored row or returned id is malformed)
/// - `Database(ConnectionFailed)` -> 503 (Service Unavailable)
/// - `Database(ConstraintViolation)` -> 409 (Conflict)
/// - `Database(NoRows)` -> 500 (Internal Server Error)
/// - `Database(QueryFailed)` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todos_core::storage::{repository_error_to_status_code, DatabaseError, RepositoryError};
///
/// let error = RepositoryError::Database(DatabaseError::ConnectionFailed("timeout".to_string()));
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::Shape(ShapeError::Mismatch(_)) => 500,
        RepositoryError::Database(DatabaseError::ConnectionFailed(_)) => 503,
        RepositoryError::Database(DatabaseError::ConstraintViolation(_)) => 409,
        RepositoryError::Database(DatabaseError::NoRows) => 500,
        RepositoryError::Database(DatabaseError::QueryFailed(_)) => 500,
    }
}
