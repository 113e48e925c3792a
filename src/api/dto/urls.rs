//! DTOs for the link management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::shorten::validate_destination;
use crate::domain::entities::UrlRecord;

/// Request body for `PUT /api/urls/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUrlRequest {
    #[validate(custom(function = "validate_destination"))]
    pub url: String,
}

/// Response after replacing a destination.
#[derive(Debug, Serialize)]
pub struct UpdateUrlResponse {
    pub success: bool,
    pub code: String,
    pub original_url: String,
}

/// Response after deleting a link.
#[derive(Debug, Serialize)]
pub struct DeleteUrlResponse {
    pub success: bool,
    pub message: String,
}

/// Newest links, at most 100.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub success: bool,
    pub count: usize,
    pub urls: Vec<UrlRecord>,
}
