//! HTTP router and handlers.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::app::AppState;

pub mod backup;
pub mod events;
pub mod health;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .route("/status", get(health::status))
        .route("/add", get(events::add_event))
        .route("/consultation", get(events::list_events))
        .route("/count", get(events::count_events))
        .route("/backup", get(backup::last_backup))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
