//! Short code generation.
//!
//! Codes are drawn from the OS random source and mapped onto a 62-character
//! alphanumeric alphabet. The mapping is a pure function of the input bytes so
//! it can be tested without randomness.

/// Length of every generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Alphabet generated codes are drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The OS random source could not be read.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read random bytes: {0}")]
pub struct CodeGenError(#[from] getrandom::Error);

/// Generates a random 6-character short code.
///
/// Uniqueness is not guaranteed; callers check the store for collisions.
///
/// # Errors
///
/// Returns [`CodeGenError`] if the system random number generator fails.
pub fn generate_short_code() -> Result<String, CodeGenError> {
    let mut buffer = [0u8; SHORT_CODE_LENGTH];
    getrandom::fill(&mut buffer)?;
    Ok(short_code_from_bytes(&buffer))
}

/// Maps each byte to `ALPHABET[byte % 62]`.
pub fn short_code_from_bytes(bytes: &[u8; SHORT_CODE_LENGTH]) -> String {
    bytes
        .iter()
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect()
}
