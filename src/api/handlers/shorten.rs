//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://ziglang.org",
///   "code": "zig",        // optional
///   "expires_in": 3600    // optional, seconds
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "success": true, "code": "zig", "original_url": "https://ziglang.org" }
/// ```
///
/// # Errors
///
/// - 400 if the body, URL, code or `expires_in` is invalid
/// - 409 if the code is already taken
/// - 500 if a store is unavailable or not configured
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .link_service()?
        .create(&payload.url, payload.code.as_deref(), payload.expires_in)
        .await?;

    tracing::info!(code = %record.code, "Short link created");

    let short_url = state.short_url(&record.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            success: true,
            code: record.code,
            original_url: record.original_url,
            short_url,
        }),
    ))
}
