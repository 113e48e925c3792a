//! Repository trait for the authoritative URL table.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Relational store holding every shortened link.
///
/// The store is the source of truth for all record fields. Uniqueness of
/// `code` is enforced here and nowhere else.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-memory fake for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Replaces the destination of an existing record.
    ///
    /// Returns `Ok(None)` when no row matched `code`.
    async fn update_url(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Deletes a record. Returns `Ok(false)` when no row matched `code`.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Adds one to the click counter. Returns `Ok(false)` when no row matched.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Lists at most `limit` records, newest `created_at` first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;
}
