//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;
pub mod urls;

pub use fallback::{fallback_handler, method_not_allowed_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
pub use urls::{delete_url_handler, get_url_handler, list_urls_handler, update_url_handler};

use axum::extract::{Path, rejection::PathRejection};

use crate::error::AppError;

pub(crate) const MISSING_CODE_MESSAGE: &str = "Missing short code";

/// Extracts the `{code}` segment, rejecting undecodable and blank codes with 400.
pub(crate) fn code_from_path(
    path: Result<Path<String>, PathRejection>,
) -> Result<String, AppError> {
    let Path(code) = path?;
    require_code(&code)?;
    Ok(code)
}

/// Rejects a blank `{code}` path segment.
pub(crate) fn require_code(code: &str) -> Result<&str, AppError> {
    if code.trim().is_empty() {
        Err(AppError::bad_request(MISSING_CODE_MESSAGE))
    } else {
        Ok(code)
    }
}
