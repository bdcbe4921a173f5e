//! Task API endpoints
//!
//! The list/create/complete/undo/delete contract the sync client consumes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::StoreError;
use crate::state::AppState;
use crate::store::StoredTask;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub task: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub task: String,
    pub status: bool,
    pub created_at: String,
}

impl From<StoredTask> for TaskResponse {
    fn from(task: StoredTask) -> Self {
        Self {
            id: task.id,
            task: task.task,
            status: task.status,
            created_at: task.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

fn store_error(e: StoreError) -> ApiError {
    match e {
        StoreError::TaskNotFound(id) => {
            api_error(StatusCode::NOT_FOUND, format!("Task {} not found", id))
        }
        StoreError::InvalidInput(msg) => api_error(StatusCode::BAD_REQUEST, msg),
        e => api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/task - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.task_store().list().await.map_err(store_error)?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    if req.task.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Task cannot be empty"));
    }

    let created = state
        .task_store()
        .create(StoredTask::new(req.task))
        .await
        .map_err(store_error)?;
    info!("Inserted task {}", created.id);

    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// PUT /api/tasks/{id} - Mark a task as done
async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    set_status(&state, &id, true).await
}

/// PUT /api/undoTask/{id} - Mark a task as not done
async fn undo_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    set_status(&state, &id, false).await
}

async fn set_status(
    state: &AppState,
    id: &str,
    status: bool,
) -> Result<Json<TaskResponse>, ApiError> {
    let updated = state
        .task_store()
        .set_status(id, status)
        .await
        .map_err(store_error)?;
    info!("Set status of task {} to {}", id, status);

    Ok(Json(TaskResponse::from(updated)))
}

/// DELETE /api/deleteTask/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.task_store().delete(&id).await.map_err(store_error)?;

    if deleted {
        info!("Deleted task {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(api_error(
            StatusCode::NOT_FOUND,
            format!("Task {} not found", id),
        ))
    }
}

/// DELETE /api/deleteAllTask - Delete every task
async fn delete_all_tasks(State(state): State<AppState>) -> Result<Json<u64>, ApiError> {
    let count = state.task_store().delete_all().await.map_err(store_error)?;
    info!("Deleted all {} tasks", count);
    Ok(Json(count))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/task", get(list_tasks))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/{id}", put(complete_task))
        .route("/api/undoTask/{id}", put(undo_task))
        .route("/api/deleteTask/{id}", delete(delete_task))
        .route("/api/deleteAllTask", delete(delete_all_tasks))
}
