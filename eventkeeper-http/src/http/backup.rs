//! Backup freshness endpoint.

use axum::{extract::State, Json};
use eventkeeper_core::BackupReport;

use crate::{app::AppState, error::ApiError};

/// `GET /backup` reports the latest backup as `{"name", "age_seconds"}`.
///
/// Both fields are null when the directory is missing or empty. A directory
/// that exists but cannot be read is a 500, not an empty report.
pub async fn last_backup(State(state): State<AppState>) -> Result<Json<BackupReport>, ApiError> {
    let lookup = state
        .blocking(|ctx| Ok(ctx.backup_locator.locate()?))
        .await?;
    Ok(Json(lookup.to_report()))
}
