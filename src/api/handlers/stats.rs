//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use super::code_from_path;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count of a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// { "code": "zig", "clicks": 1, "created_at": "2026-01-01T00:00:00Z" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let code = code_from_path(path)?;
    let record = state.link_service()?.get(&code).await?;

    Ok(Json(StatsResponse {
        code: record.code,
        clicks: record.clicks,
        created_at: record.created_at,
    }))
}
