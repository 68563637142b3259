//! SQLite value conversion functions.
//!
//! Pure functions for converting between SQLite values and the JSON values
//! used by `todos_core` rows and query arguments. These are testable in
//! isolation without a running connection.

use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::Statement;
use serde_json::{Number, Value};
use todos_core::todo::Row;

/// Name and boolean-ness of a result column, captured before stepping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub boolean: bool,
}

/// Captures the result columns of a prepared statement.
///
/// SQLite has no boolean storage class, so columns declared `BOOLEAN` (or
/// `BOOL`) are flagged to be surfaced as JSON booleans.
pub fn column_layout(stmt: &Statement<'_>) -> Vec<ColumnInfo> {
    stmt.columns()
        .iter()
        .map(|column| ColumnInfo {
            name: column.name().to_string(),
            boolean: column.decl_type().is_some_and(is_boolean_type),
        })
        .collect()
}

fn is_boolean_type(decl_type: &str) -> bool {
    decl_type.eq_ignore_ascii_case("BOOLEAN") || decl_type.eq_ignore_ascii_case("BOOL")
}

/// Converts a SQLite row to a [`Row`] keyed by column name.
pub fn row_to_map(row: &rusqlite::Row<'_>, columns: &[ColumnInfo]) -> rusqlite::Result<Row> {
    let mut map = Row::new();
    for (idx, column) in columns.iter().enumerate() {
        let value = row.get_ref(idx)?;
        map.insert(column.name.clone(), sql_to_json(value, column.boolean));
    }
    Ok(map)
}

/// Converts a single SQLite value to JSON.
pub fn sql_to_json(value: ValueRef<'_>, boolean: bool) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) if boolean => Value::Bool(i != 0),
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}

/// Converts a JSON query argument to a SQLite value.
///
/// Booleans are stored as 0/1. Arrays and objects are stored as JSON text.
pub fn json_to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map_or(SqlValue::Null, SqlValue::Real),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => SqlValue::Text(value.to_string()),
    }
}
