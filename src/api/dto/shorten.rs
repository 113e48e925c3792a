//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::application::services::{INVALID_EXPIRES_IN_MESSAGE, is_valid_expires_in};
use crate::utils::validation::{
    INVALID_CODE_LENGTH_MESSAGE, INVALID_CODE_MESSAGE, INVALID_URL_MESSAGE, is_valid_code,
    is_valid_code_length, is_valid_url,
};

/// Request to shorten one URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Destination; must start with `http://` or `https://`.
    #[validate(custom(function = "validate_destination"))]
    pub url: String,

    /// Optional custom short code, 3-32 characters of `[A-Za-z0-9_-]`.
    #[validate(custom(function = "validate_custom_code"))]
    pub code: Option<String>,

    /// Optional lifetime in seconds; sets `expires_at` and the cache TTL.
    #[validate(custom(function = "validate_expires_in"))]
    pub expires_in: Option<u64>,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    pub code: String,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_destination(url: &str) -> Result<(), ValidationError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(invalid("url", INVALID_URL_MESSAGE))
    }
}

fn validate_custom_code(code: &str) -> Result<(), ValidationError> {
    if !is_valid_code(code) {
        return Err(invalid("code", INVALID_CODE_MESSAGE));
    }
    if !is_valid_code_length(code) {
        return Err(invalid("code_length", INVALID_CODE_LENGTH_MESSAGE));
    }
    Ok(())
}

fn validate_expires_in(expires_in: u64) -> Result<(), ValidationError> {
    if is_valid_expires_in(expires_in) {
        Ok(())
    } else {
        Err(invalid("expires_in", INVALID_EXPIRES_IN_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::MAX_EXPIRES_IN_SECONDS;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let req = parse(json!({
            "url": "https://ziglang.org",
            "code": "zig",
            "expires_in": 3600
        }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_absent() {
        let req = parse(json!({ "url": "https://example.com" }));
        assert!(req.code.is_none());
        assert!(req.expires_in.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_short_code_rejected() {
        let req = parse(json!({ "url": "https://x.com/y", "code": "ab" }));
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));
    }

    #[test]
    fn test_bad_url_rejected() {
        let req = parse(json!({ "url": "example.com" }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_expires_in_rejected() {
        let req = parse(json!({ "url": "https://example.com", "expires_in": 0 }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_expires_in_bounds() {
        let at_max = parse(json!({
            "url": "https://example.com",
            "expires_in": MAX_EXPIRES_IN_SECONDS
        }));
        assert!(at_max.validate().is_ok());

        let over_max = parse(json!({
            "url": "https://example.com",
            "expires_in": MAX_EXPIRES_IN_SECONDS + 1
        }));
        let errors = over_max.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("expires_in"));
    }

    #[test]
    fn test_negative_expires_in_does_not_parse() {
        let result = serde_json::from_value::<ShortenRequest>(
            json!({ "url": "https://example.com", "expires_in": -5 }),
        );
        assert!(result.is_err());
    }
}
