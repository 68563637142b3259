//! Conversion of untyped rows into [`Todo`] records.

use serde_json::Value;

use super::{Row, ShapeError, Todo};

/// Builds a [`Todo`] from a row.
///
/// Construction is strict: a missing `order` or `title`, or a value of the
/// wrong type in any column, is reported as [`ShapeError::Mismatch`] with the
/// underlying deserialization detail.
pub fn as_todo(row: Row) -> Result<Todo, ShapeError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}
