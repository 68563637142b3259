//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `DatabaseError` from `todos_core::storage`.

use todos_core::storage::DatabaseError;

/// Maps a rusqlite error to a DatabaseError.
///
/// # Error Mapping
///
/// - Any `SQLITE_CONSTRAINT_*` failure → `DatabaseError::ConstraintViolation`
/// - `SQLITE_CANTOPEN` → `DatabaseError::ConnectionFailed`
/// - `QueryReturnedNoRows` → `DatabaseError::NoRows`
/// - All other errors → `DatabaseError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error) -> DatabaseError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DatabaseError::ConstraintViolation(err.to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            DatabaseError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => DatabaseError::NoRows,

        _ => DatabaseError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a DatabaseError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> DatabaseError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed => {
            DatabaseError::ConnectionFailed("Connection closed".to_string())
        }
        tokio_rusqlite::Error::Close(_) => {
            DatabaseError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => DatabaseError::QueryFailed(err.to_string()),
    }
}
