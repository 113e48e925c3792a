//! Cache service trait and error types.

use async_trait::async_trait;

/// TTL applied to cache entries written without an explicit TTL (one day).
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 86_400;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of `code -> original_url` mappings.
///
/// The cache only ever holds values read from or written to the relational
/// store in the same operation. It is never authoritative: callers treat an
/// error exactly like a miss.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached destination for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping. `ttl_seconds = None` uses the implementation default.
    async fn set_url(
        &self,
        short_code: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes a mapping. Removing an absent key is not an error.
    async fn invalidate(&self, short_code: &str) -> CacheResult<()>;
}
