//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `RowSource` trait
//! defined in `todos_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRowSource;
