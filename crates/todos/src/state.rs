//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the todo repository as a trait object plus the
//! row source it runs on, used directly only by readiness checks.

use std::sync::Arc;

use anyhow::Result;
use todos_core::storage::{RowSource, TodoModel, TodoRepository};

use crate::config::Config;
use crate::storage::SqliteRowSource;

/// Shared application state.
///
/// This is cloned for each request handler. No todo is cached here; every
/// request goes to the row source.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository.
    pub todos: Arc<dyn TodoRepository>,
    /// Row source backing the repository.
    pub store: Arc<dyn RowSource>,
}

impl AppState {
    /// Creates a new AppState whose repository runs on `store`.
    pub fn new(store: Arc<dyn RowSource>) -> Self {
        Self {
            todos: Arc::new(TodoModel::new(store.clone())),
            store,
        }
    }

    /// Opens the SQLite database described by `config`.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let source = if config.is_in_memory() {
            SqliteRowSource::open_in_memory().await?
        } else {
            SqliteRowSource::open(&config.sqlite_path).await?
        };

        if config.init_schema {
            source.ensure_schema().await?;
        }

        tracing::info!(
            path = %config.sqlite_path,
            init_schema = config.init_schema,
            "Using SQLite storage"
        );

        Ok(Self::new(Arc::new(source)))
    }

    /// Creates an AppState backed by a fresh in-memory database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let source = SqliteRowSource::open_in_memory()
            .await
            .expect("in-memory database should open");
        source
            .ensure_schema()
            .await
            .expect("schema should apply to a fresh database");
        Self::new(Arc::new(source))
    }
}
