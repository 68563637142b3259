use async_trait::async_trait;
use serde_json::Value;

use crate::todo::{Row, Todo};

use super::{DatabaseError, Result};

/// Executes parameterized queries against a relational store.
///
/// Queries use positional placeholders (`?1`, `?2`, ...) bound in order from
/// `args`.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Runs a query and returns every resulting row.
    async fn fetch(
        &self,
        query: &str,
        args: &[Value],
    ) -> std::result::Result<Vec<Row>, DatabaseError>;

    /// Runs a query and returns its first row.
    ///
    /// Reports [`DatabaseError::NoRows`] when the query yields nothing.
    async fn fetch_one(
        &self,
        query: &str,
        args: &[Value],
    ) -> std::result::Result<Row, DatabaseError>;

    /// Runs a statement and returns the number of affected rows.
    async fn execute(
        &self,
        query: &str,
        args: &[Value],
    ) -> std::result::Result<u64, DatabaseError>;
}

/// Repository for todo operations.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets every todo in storage order.
    async fn get_todos(&self) -> Result<Vec<Todo>>;

    /// Gets a todo by its ID.
    async fn get_todo(&self, id: i64) -> Result<Option<Todo>>;

    /// Inserts a todo and returns it with the generated ID.
    async fn add_todo(&self, todo: &Todo) -> Result<Todo>;

    /// Updates the todo matching `todo.id` and returns the given value.
    async fn patch_todo(&self, todo: &Todo) -> Result<Todo>;

    /// Deletes every todo.
    async fn delete_todos(&self) -> Result<()>;

    /// Deletes a todo by its ID.
    async fn delete_todo(&self, id: i64) -> Result<()>;
}
