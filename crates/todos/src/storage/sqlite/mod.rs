//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based [`RowSource`](todos_core::storage::RowSource)
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod row_source;
pub mod schema;

pub use row_source::SqliteRowSource;
