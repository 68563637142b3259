//! SQLite schema definitions.
//!
//! Pure data, no I/O. The repository queries themselves live in
//! `todos_core::storage::queries`.

/// SQL statement to create the todos table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    "order" INTEGER NOT NULL,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT 0
);
"#;

/// Trivial query used by readiness checks.
pub const PING: &str = "SELECT 1 AS ok";
