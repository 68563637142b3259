//! Todo repository composed from single row-source round trips.
//!
//! Every operation issues exactly one query, then applies one typed step:
//! validation of the returned rows, the no-rows recovery of `get_todo`, or
//! echoing the written value back.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::todo::{as_todo, Row, ShapeError, Todo};

use super::{queries, DatabaseError, RepositoryError, Result, RowSource, TodoRepository};

/// [`TodoRepository`] backed by any [`RowSource`].
#[derive(Clone)]
pub struct TodoModel {
    source: Arc<dyn RowSource>,
}

impl TodoModel {
    /// Creates a repository that runs its queries on `source`.
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self { source }
    }
}

/// Positional arguments shared by insert and update: order, title, completed.
fn write_args(todo: &Todo) -> Vec<Value> {
    vec![
        Value::from(todo.order),
        Value::from(todo.title.as_str()),
        Value::from(todo.completed),
    ]
}

/// Reads the generated ID from an `INSERT ... RETURNING id` row.
fn generated_id(row: &Row) -> std::result::Result<i64, ShapeError> {
    row.get("id").and_then(Value::as_i64).ok_or_else(|| {
        ShapeError::Mismatch("insert did not return an integer `id`".to_string())
    })
}

#[async_trait]
impl TodoRepository for TodoModel {
    async fn get_todos(&self) -> Result<Vec<Todo>> {
        let rows = self.source.fetch(queries::SELECT_TODOS, &[]).await?;

        rows.into_iter()
            .map(|row| as_todo(row).map_err(RepositoryError::from))
            .collect()
    }

    async fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        match self
            .source
            .fetch_one(queries::SELECT_TODO_BY_ID, &[Value::from(id)])
            .await
        {
            Ok(row) => Ok(Some(as_todo(row)?)),
            Err(DatabaseError::NoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn add_todo(&self, todo: &Todo) -> Result<Todo> {
        let row = self
            .source
            .fetch_one(queries::INSERT_TODO, &write_args(todo))
            .await?;

        Ok(todo.clone().with_id(generated_id(&row)?))
    }

    async fn patch_todo(&self, todo: &Todo) -> Result<Todo> {
        let mut args = write_args(todo);
        args.push(todo.id.map_or(Value::Null, Value::from));

        // Affected rows are not checked: patching a missing or absent id still
        // succeeds. `WHERE id = NULL` matches nothing.
        self.source.execute(queries::UPDATE_TODO, &args).await?;

        Ok(todo.clone())
    }

    async fn delete_todos(&self) -> Result<()> {
        self.source.execute(queries::DELETE_TODOS, &[]).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> Result<()> {
        self.source
            .execute(queries::DELETE_TODO, &[Value::from(id)])
            .await?;
        Ok(())
    }
}
