//! SQLite row source implementation.
//!
//! Implements the `RowSource` trait from `todos_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use serde_json::Value;
use tokio_rusqlite::Connection;

use todos_core::storage::{DatabaseError, RowSource};
use todos_core::todo::Row;

use super::conversions::{column_layout, json_to_sql, row_to_map};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based row source.
///
/// Calls are executed on the background thread owned by the
/// `tokio_rusqlite::Connection`, one at a time.
pub struct SqliteRowSource {
    conn: Connection,
}

impl SqliteRowSource {
    /// Opens a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    pub async fn open(path: &str) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Creates the todos table if it doesn't exist.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl RowSource for SqliteRowSource {
    async fn fetch(&self, query: &str, args: &[Value]) -> Result<Vec<Row>, DatabaseError> {
        tracing::debug!(query = query.trim(), args = ?args, "fetch");

        let query = query.to_string();
        let params: Vec<_> = args.iter().map(json_to_sql).collect();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&query).map_err(wrap_err)?;
                let columns = column_layout(&stmt);
                let rows = stmt
                    .query_map(params_from_iter(params.iter()), |row| {
                        row_to_map(row, &columns)
                    })
                    .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn fetch_one(&self, query: &str, args: &[Value]) -> Result<Row, DatabaseError> {
        tracing::debug!(query = query.trim(), args = ?args, "fetch_one");

        let query = query.to_string();
        let params: Vec<_> = args.iter().map(json_to_sql).collect();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&query).map_err(wrap_err)?;
                let columns = column_layout(&stmt);
                let row = stmt
                    .query_row(params_from_iter(params.iter()), |row| {
                        row_to_map(row, &columns)
                    })
                    .map_err(wrap_err)?;
                Ok(row)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn execute(&self, query: &str, args: &[Value]) -> Result<u64, DatabaseError> {
        tracing::debug!(query = query.trim(), args = ?args, "execute");

        let query = query.to_string();
        let params: Vec<_> = args.iter().map(json_to_sql).collect();

        self.conn
            .call(move |conn| {
                let affected = conn
                    .execute(&query, params_from_iter(params.iter()))
                    .map_err(wrap_err)?;
                Ok(affected as u64)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use todos_core::storage::{RepositoryError, TodoModel, TodoRepository};
    use todos_core::todo::Todo;

    use super::*;

    async fn source() -> SqliteRowSource {
        let source = SqliteRowSource::open_in_memory().await.unwrap();
        source.ensure_schema().await.unwrap();
        source
    }

    async fn model() -> TodoModel {
        TodoModel::new(Arc::new(source().await))
    }

    // ==================== RowSource Tests ====================

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let source = source().await;
        source.ensure_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_one_reports_no_rows() {
        let source = source().await;

        let result = source
            .fetch_one("SELECT id FROM todos WHERE id = ?1", &[json!(1)])
            .await;

        assert_eq!(result, Err(DatabaseError::NoRows));
    }

    #[tokio::test]
    async fn test_fetch_surfaces_booleans_and_integers() {
        let source = source().await;
        source
            .execute(
                r#"INSERT INTO todos ("order", title, completed) VALUES (?1, ?2, ?3)"#,
                &[json!(2), json!("b"), json!(true)],
            )
            .await
            .unwrap();

        let rows = source
            .fetch(r#"SELECT id, "order", title, completed FROM todos"#, &[])
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["order"], json!(2));
        assert_eq!(rows[0]["completed"], json!(true));
        assert!(rows[0]["id"].is_i64());
    }

    #[tokio::test]
    async fn test_execute_returns_affected_rows() {
        let source = source().await;

        let affected = source.execute("DELETE FROM todos", &[]).await.unwrap();

        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_missing_table_is_query_failure() {
        let source = SqliteRowSource::open_in_memory().await.unwrap();

        let result = source.fetch("SELECT * FROM todos", &[]).await;

        assert!(matches!(result, Err(DatabaseError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_not_null_violation_is_constraint_violation() {
        let source = source().await;

        let result = source
            .execute(
                r#"INSERT INTO todos ("order", title) VALUES (?1, ?2)"#,
                &[json!(1), Value::Null],
            )
            .await;

        assert!(matches!(result, Err(DatabaseError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_ping_returns_a_row() {
        let source = source().await;

        let row = source.fetch_one(schema::PING, &[]).await.unwrap();

        assert_eq!(row["ok"], json!(1));
    }

    // ==================== TodoModel over SQLite ====================

    #[tokio::test]
    async fn test_get_todo_nonexistent_is_none() {
        let model = model().await;

        assert_eq!(model.get_todo(12345).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_todo_generates_id() {
        let model = model().await;
        let todo = Todo::new(1, "a");

        let added = model.add_todo(&todo).await.unwrap();

        assert!(added.id.is_some());
        assert_eq!(added.clone().without_id(), todo);
    }

    #[tokio::test]
    async fn test_add_then_get_round_trips() {
        let model = model().await;
        let todo = Todo::new(7, "Round trip").with_completed(true);

        let added = model.add_todo(&todo).await.unwrap();
        let id = added.id.unwrap();
        let fetched = model.get_todo(id).await.unwrap().unwrap();

        assert_eq!(fetched.id, Some(id));
        assert_eq!(fetched.without_id(), todo);
    }

    #[tokio::test]
    async fn test_get_todos_returns_every_row() {
        let model = model().await;
        model.add_todo(&Todo::new(1, "first")).await.unwrap();
        model.add_todo(&Todo::new(2, "second")).await.unwrap();

        let todos = model.get_todos().await.unwrap();

        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&"first"));
        assert!(titles.contains(&"second"));
        assert!(todos.iter().all(|t| t.id.is_some()));
    }

    #[tokio::test]
    async fn test_patch_todo_updates_row() {
        let model = model().await;
        let added = model.add_todo(&Todo::new(1, "draft")).await.unwrap();
        let id = added.id.unwrap();

        let patch = Todo::new(3, "final").with_completed(true).with_id(id);
        let patched = model.patch_todo(&patch).await.unwrap();

        assert_eq!(patched, patch);
        assert_eq!(model.get_todo(id).await.unwrap(), Some(patch));
    }

    #[tokio::test]
    async fn test_patch_todo_nonexistent_returns_input() {
        let model = model().await;
        let patch = Todo::new(1, "ghost").with_id(999);

        let patched = model.patch_todo(&patch).await.unwrap();

        assert_eq!(patched, patch);
        assert_eq!(model.get_todo(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_patch_todo_without_id_changes_nothing() {
        let model = model().await;
        let added = model.add_todo(&Todo::new(1, "kept")).await.unwrap();
        let patch = Todo::new(2, "ignored").with_completed(true);

        let patched = model.patch_todo(&patch).await.unwrap();

        assert_eq!(patched, patch);
        assert_eq!(model.get_todos().await.unwrap(), vec![added]);
    }

    #[tokio::test]
    async fn test_delete_todo_removes_only_that_row() {
        let model = model().await;
        let keep = model.add_todo(&Todo::new(1, "keep")).await.unwrap();
        let removed = model.add_todo(&Todo::new(2, "drop")).await.unwrap();

        model.delete_todo(removed.id.unwrap()).await.unwrap();

        assert_eq!(model.get_todos().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_todo_nonexistent_succeeds() {
        let model = model().await;

        model.delete_todo(424242).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_todos_then_list_is_empty() {
        let model = model().await;
        model.add_todo(&Todo::new(1, "a")).await.unwrap();
        model.add_todo(&Todo::new(2, "b")).await.unwrap();

        model.delete_todos().await.unwrap();

        assert!(model.get_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_without_table_surfaces_database_error() {
        let source = SqliteRowSource::open_in_memory().await.unwrap();
        let model = TodoModel::new(Arc::new(source));

        let result = model.get_todo(1).await;

        assert!(matches!(result, Err(RepositoryError::Database(_))));
    }
}
