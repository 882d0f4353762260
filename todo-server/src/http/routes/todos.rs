//! Todo endpoints
//!
//! Each handler opens one request-scoped transaction, performs a single
//! repository operation, and commits. Any early return drops the
//! transaction, which rolls back and releases the connection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{Todo, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;

/// Candidate record shape for create and update.
/// Every field is required; updates replace the whole record.
#[derive(Debug, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub done: bool,
}

/// Todo response
#[derive(Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            done: t.done,
        }
    }
}

/// Delete confirmation
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// POST /todos/ - create a new todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ValidJson(draft): ValidJson<TodoDraft>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let mut tx = state.pool.begin().await?;
    let todo = TodoRepo::new(&mut tx).create(&draft.title, draft.done).await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// GET /todos/ - list all todos
async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let todos = TodoRepo::new(&mut tx).list().await?;
    tx.commit().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// PUT /todos/{id} - replace every field of a todo
async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    ValidJson(draft): ValidJson<TodoDraft>,
) -> Result<Json<TodoResponse>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let todo = TodoRepo::new(&mut tx)
        .update(id, &draft.title, draft.done)
        .await?;
    tx.commit().await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id} - remove a todo permanently
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut tx = state.pool.begin().await?;
    TodoRepo::new(&mut tx).delete(id).await?;
    tx.commit().await?;

    Ok(Json(DeleteResponse { message: "Deleted" }))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}
