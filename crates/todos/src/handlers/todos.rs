//! Todo CRUD handlers.
//!
//! Bodies are validated into [`Todo`] by the JSON extractor before the
//! repository is called; results are serialized back as JSON. Absence is
//! `null`, not a 404.

use axum::{
    extract::{Path, State},
    Json,
};

use todos_core::todo::Todo;

use crate::{handlers::AppError, state::AppState};

/// List every todo (GET /).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.get_todos().await?;
    Ok(Json(todos))
}

/// Create a todo (POST /). Any `id` in the body is ignored.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<Todo>,
) -> Result<Json<Todo>, AppError> {
    tracing::debug!(payload = ?payload, "Received create todo request");

    let todo = state.todos.add_todo(&payload.without_id()).await?;

    tracing::info!(todo_id = ?todo.id, title = %todo.title, "Created todo");
    Ok(Json(todo))
}

/// Update the todo identified by the body's `id` (PATCH /).
pub async fn patch_todo(
    State(state): State<AppState>,
    Json(payload): Json<Todo>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos.patch_todo(&payload).await?;

    tracing::info!(todo_id = ?todo.id, "Patched todo");
    Ok(Json(todo))
}

/// Delete every todo (DELETE /).
pub async fn delete_todos(State(state): State<AppState>) -> Result<Json<()>, AppError> {
    state.todos.delete_todos().await?;

    tracing::info!("Deleted all todos");
    Ok(Json(()))
}

/// Get a single todo (GET /{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Todo>>, AppError> {
    let todo = state.todos.get_todo(id).await?;
    Ok(Json(todo))
}

/// Delete a single todo (DELETE /{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<()>, AppError> {
    state.todos.delete_todo(id).await?;

    tracing::info!(todo_id = id, "Deleted todo");
    Ok(Json(()))
}
