//! DTO for per-link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Click count of one link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}
