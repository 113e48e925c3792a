//! Syntactic validation of destination URLs and short codes.
//!
//! These checks are intentionally shallow: a URL only has to look like an
//! absolute `http(s)` address, and code length is checked separately from the
//! character set so callers decide which rules apply.

/// Minimum accepted length of a destination URL, in characters.
pub const MIN_URL_LENGTH: usize = 10;

/// Minimum length of a custom short code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Maximum length of a custom short code.
pub const MAX_CODE_LENGTH: usize = 32;

pub const INVALID_URL_MESSAGE: &str =
    "Invalid URL: must start with http:// or https:// and be at least 10 characters";
pub const INVALID_CODE_MESSAGE: &str =
    "Invalid code: only letters, digits, '_' and '-' are allowed";
pub const INVALID_CODE_LENGTH_MESSAGE: &str =
    "Invalid code: length must be between 3 and 32 characters";

/// Returns true when `s` starts with `http://` or `https://` and is at least
/// [`MIN_URL_LENGTH`] characters long.
///
/// No host, port or character checks are performed.
pub fn is_valid_url(s: &str) -> bool {
    s.chars().count() >= MIN_URL_LENGTH && (s.starts_with("http://") || s.starts_with("https://"))
}

/// Returns true when every character of `s` is in `[A-Za-z0-9_-]`.
///
/// The empty string passes; use [`is_valid_code_length`] to reject it.
pub fn is_valid_code(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Returns true when `s` is between [`MIN_CODE_LENGTH`] and
/// [`MAX_CODE_LENGTH`] characters long, inclusive.
pub fn is_valid_code_length(s: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&s.chars().count())
}
