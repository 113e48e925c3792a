//! Handlers for link management endpoints (list, get, update, delete).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use validator::Validate;

use super::code_from_path;
use crate::api::dto::urls::{
    DeleteUrlResponse, UpdateUrlRequest, UpdateUrlResponse, UrlListResponse,
};
use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the newest links.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// At most 100 records, ordered by `created_at` descending.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<UrlListResponse>, AppError> {
    let urls = state.link_service()?.list_recent().await?;

    Ok(Json(UrlListResponse {
        success: true,
        count: urls.len(),
        urls,
    }))
}

/// Returns the full record of a link.
///
/// # Endpoint
///
/// `GET /api/urls/{code}`
///
/// Always read from the database, never from the cache.
pub async fn get_url_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UrlRecord>, AppError> {
    let code = code_from_path(path)?;
    let record = state.link_service()?.get(&code).await?;

    Ok(Json(record))
}

/// Replaces the destination of a link.
///
/// # Endpoint
///
/// `PUT /api/urls/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://newsite.org" }
/// ```
///
/// # Cache
///
/// The cached entry is invalidated and rewritten with the new destination.
///
/// # Errors
///
/// - 400 if the body or URL is invalid
/// - 404 if the link doesn't exist
pub async fn update_url_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateUrlRequest>, JsonRejection>,
) -> Result<Json<UpdateUrlResponse>, AppError> {
    let code = code_from_path(path)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state.link_service()?.update(&code, &payload.url).await?;
    tracing::info!(code = %record.code, "Short link updated");

    Ok(Json(UpdateUrlResponse {
        success: true,
        code: record.code,
        original_url: record.original_url,
    }))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/urls/{code}`
///
/// The row is removed and the cache entry invalidated. Deleting the same
/// code again returns 404.
pub async fn delete_url_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeleteUrlResponse>, AppError> {
    let code = code_from_path(path)?;
    state.link_service()?.delete(&code).await?;
    tracing::info!(code = %code, "Short link deleted");

    Ok(Json(DeleteUrlResponse {
        success: true,
        message: format!("Short URL '{}' deleted", code),
    }))
}
