//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use super::code_from_path;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the cache, falling back to the database
/// 2. Increment the click counter (best effort)
/// 3. Return `302 Found` with a `Location` header
///
/// `expires_at` is not checked: expired links keep redirecting.
///
/// # Errors
///
/// - 400 if the code is blank or not valid UTF-8 after percent-decoding
/// - 404 if the code does not exist
/// - 500 if a store is unavailable or not configured
/// - 500 "Stored URL is not a valid redirect target" if the destination
///   cannot be sent as a `Location` header. URL validation only checks the
///   scheme and length, so a destination with control characters is accepted
///   at creation and fails here, before a click is counted.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let code = code_from_path(path)?;
    let service = state.link_service()?;

    let original_url = service.lookup(&code).await?;
    let location = HeaderValue::from_str(&original_url)
        .map_err(|_| AppError::internal("Stored URL is not a valid redirect target"))?;

    service.record_click(&code).await;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
