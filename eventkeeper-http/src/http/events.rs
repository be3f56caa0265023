//! Event endpoints: record, list, count.

use axum::{
    extract::{Query, State},
    Json,
};
use eventkeeper_core::{domain::DEFAULT_MESSAGE, Event};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{app::AppState, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct AddParams {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

/// `GET /add?message=...` records an event; an absent message defaults to
/// "hello", an empty one is stored as is.
pub async fn add_event(
    State(state): State<AppState>,
    Query(params): Query<AddParams>,
) -> Result<Json<AddResponse>, ApiError> {
    let message = params
        .message
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    let event = state
        .blocking(move |ctx| ctx.event_service.record(&message))
        .await?;
    Ok(Json(AddResponse {
        status: "added",
        timestamp: event.timestamp,
        message: event.message,
    }))
}

/// `GET /consultation` returns the latest events, newest first.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state
        .blocking(move |ctx| ctx.event_service.recent(params.limit))
        .await?;
    Ok(Json(events))
}

pub async fn count_events(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let count = state.blocking(|ctx| ctx.event_service.count()).await?;
    Ok(Json(json!({ "count": count })))
}
