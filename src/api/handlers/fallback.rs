//! JSON answers for requests that match no handler.

use axum::extract::OriginalUri;
use axum::http::Method;

use super::MISSING_CODE_MESSAGE;
use crate::error::AppError;

/// Paths that name a code-taking route with the code left out.
fn is_missing_code_path(path: &str) -> bool {
    matches!(
        path.trim_end_matches('/'),
        "" | "/api/urls" | "/api/stats"
    )
}

/// Router fallback: 400 when the short code is missing, 404 otherwise.
pub async fn fallback_handler(OriginalUri(uri): OriginalUri) -> AppError {
    if is_missing_code_path(uri.path()) {
        AppError::bad_request(MISSING_CODE_MESSAGE)
    } else {
        AppError::not_found("Route not found")
    }
}

/// Fallback for a known path hit with an unsupported method.
///
/// `PUT /api/urls` and `DELETE /api/urls` are treated as a missing code.
pub async fn method_not_allowed_handler(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> AppError {
    if is_missing_code_path(uri.path()) {
        AppError::bad_request(MISSING_CODE_MESSAGE)
    } else {
        AppError::method_not_allowed(format!("Method {method} not allowed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_code_paths() {
        for path in ["/", "/api/urls", "/api/urls/", "/api/stats", "/api/stats/"] {
            assert!(is_missing_code_path(path), "{path}");
        }
        for path in ["/api", "/api/shorten", "/api/unknown", "/health"] {
            assert!(!is_missing_code_path(path), "{path}");
        }
    }
}
