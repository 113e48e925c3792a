//! Application error type and its HTTP mapping.
//!
//! Every failure surfaced to a client carries one human-readable message:
//!
//! ```json
//! { "success": false, "error": "Short code already exists" }
//! ```
//!
//! The HTTP status is the only machine-readable part of the contract.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::utils::db_error::is_unique_violation_on_code;

/// Wire format of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Error taxonomy shared by the service layer and the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body, URL or short code (400).
    #[error("{0}")]
    InvalidInput(String),

    /// The short code is already taken (409).
    #[error("{0}")]
    Conflict(String),

    /// No record matches the short code (404).
    #[error("{0}")]
    NotFound(String),

    /// The route exists but not for this HTTP method (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// A backing store is missing from the configuration or failed (500).
    #[error("{0}")]
    StoreUnavailable(String),

    /// Anything else that is not the caller's fault (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returned when a handler needs a store handle that was never configured.
    pub fn store_not_configured() -> Self {
        Self::StoreUnavailable("Store not configured".to_string())
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return Self::conflict("Short code already exists");
        }

        tracing::error!(error = %e, "Database error");
        Self::store_unavailable("Database error")
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(format!("Invalid path: {}", rejection.body_text()))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        Self::bad_request(message)
    }
}
