//! URL record entity representing one shortened link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened link as stored in the `urls` table.
///
/// `clicks` only ever increases. `expires_at` is stored metadata: it is
/// reported to clients but does not stop the link from redirecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Returns true if the record has an expiry in the past.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }
}

/// Input data for inserting a new record. `clicks` always starts at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewUrlRecord {
    /// Builds a record created at `now`, expiring `ttl_seconds` later if given.
    pub fn new(
        code: String,
        original_url: String,
        now: DateTime<Utc>,
        ttl_seconds: Option<u64>,
    ) -> Self {
        let expires_at = ttl_seconds
            .and_then(|ttl| i64::try_from(ttl).ok())
            .and_then(chrono::Duration::try_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl));

        Self {
            code,
            original_url,
            created_at: now,
            expires_at,
        }
    }
}
