//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: HashMap<String, UrlRecord>,
}

/// [`UrlRepository`] backed by a `HashMap`, for tests.
///
/// Enforces the same unique-code rule as the `urls` table, atomically under
/// one lock, so concurrent inserts of the same code race exactly like they do
/// against Postgres. [`MemoryUrlRepository::set_failing`] simulates an outage.
#[derive(Default)]
pub struct MemoryUrlRepository {
    table: Mutex<Table>,
    failing: AtomicBool,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with a store error until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::store_unavailable("Database error"));
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        self.check()?;
        Ok(self.lock().rows.get(code).cloned())
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.check()?;
        let mut table = self.lock();

        if table.rows.contains_key(&new_record.code) {
            return Err(AppError::conflict("Short code already exists"));
        }

        table.next_id += 1;
        let record = UrlRecord {
            id: table.next_id,
            code: new_record.code,
            original_url: new_record.original_url,
            clicks: 0,
            created_at: new_record.created_at,
            expires_at: new_record.expires_at,
        };
        table.rows.insert(record.code.clone(), record.clone());

        Ok(record)
    }

    async fn update_url(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        self.check()?;
        let mut table = self.lock();

        Ok(table.rows.get_mut(code).map(|record| {
            record.original_url = original_url.to_string();
            record.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        self.check()?;
        Ok(self.lock().rows.remove(code).is_some())
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        self.check()?;
        let mut table = self.lock();

        match table.rows.get_mut(code) {
            Some(record) => {
                record.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.check()?;
        let mut records: Vec<UrlRecord> = self.lock().rows.values().cloned().collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn new_record(code: &str) -> NewUrlRecord {
        NewUrlRecord::new(
            code.to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryUrlRepository::new();
        let record = repo.insert(new_record("abc")).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.clicks, 0);
        assert_eq!(repo.find_by_code("abc").await.unwrap(), Some(record));
        assert_eq!(repo.find_by_code("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_duplicate_conflicts() {
        let repo = MemoryUrlRepository::new();
        repo.insert(new_record("abc")).await.unwrap();

        let result = repo.insert(new_record("abc")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_list_recent_orders_and_caps() {
        let repo = MemoryUrlRepository::new();
        let now = Utc::now();
        for i in 0..5 {
            let mut new = new_record(&format!("code{i}"));
            new.created_at = now + Duration::seconds(i);
            repo.insert(new).await.unwrap();
        }

        let records = repo.list_recent(3).await.unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["code4", "code3", "code2"]);
    }

    #[tokio::test]
    async fn test_failing_repository() {
        let repo = MemoryUrlRepository::new();
        repo.set_failing(true);

        let result = repo.find_by_code("abc").await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
