//! Health check endpoint

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    data_dir: String,
    task_count: usize,
}

async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let task_count = state
        .task_store()
        .list()
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?
        .len();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_dir: state.data_dir().to_string_lossy().to_string(),
        task_count,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
