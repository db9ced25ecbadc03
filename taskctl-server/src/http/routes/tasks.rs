//! Task endpoints
//!
//! - `GET /tasks` - list every task
//! - `GET /task/{id}` - fetch one task
//! - `POST /task` - create a task
//! - `PUT /task/{id}` - replace a task's writable fields
//! - `DELETE /task/{id}` - delete a task (idempotent)

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidTaskId};
use crate::http::server::AppState;
use crate::models::{NewTask, Task, TaskUpdate};

/// Body returned by DELETE
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store.list().await?;
    Ok(Json(tasks))
}

async fn get_task(
    State(state): State<AppState>,
    ValidTaskId(id): ValidTaskId,
) -> Result<Json<Task>, ApiError> {
    let task = state.store.get(id).await?;
    Ok(Json(task))
}

async fn create_task(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewTask>,
) -> Result<Json<Task>, ApiError> {
    let task = state.store.create(req).await?;
    tracing::info!(task_id = %task.task_id, "task created");
    Ok(Json(task))
}

async fn update_task(
    State(state): State<AppState>,
    ValidTaskId(id): ValidTaskId,
    JsonBody(req): JsonBody<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let task = state.store.update(id, req).await?;
    tracing::info!(task_id = %id, status = %task.status, "task updated");
    Ok(Json(task))
}

async fn delete_task(
    State(state): State<AppState>,
    ValidTaskId(id): ValidTaskId,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.store.delete(id).await?;
    tracing::info!(task_id = %id, removed, "task deleted");
    Ok(Json(MessageResponse {
        message: "Succeed to delete task",
    }))
}

/// Task routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/task", post(create_task))
        .route(
            "/task/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
