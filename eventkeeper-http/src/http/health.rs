//! Liveness and status endpoints.

use axum::{extract::State, Json};
use eventkeeper_core::services::StatusSummary;
use serde_json::{json, Value};

use crate::{app::AppState, error::ApiError};

pub async fn index() -> Json<Value> {
    Json(json!({ "status": "Bonjour tout le monde !" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Event totals plus backup freshness.
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusSummary>, ApiError> {
    let summary = state
        .blocking(|ctx| ctx.status_service.get_status())
        .await?;
    Ok(Json(summary))
}
