//! Cache-aside access to short links.
//!
//! The relational store is authoritative for every field. The cache only
//! accelerates `code -> original_url` lookups and is written exclusively with
//! values that came from a successful store read or write in the same call.
//! Cache failures are logged and otherwise ignored.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::generate_short_code;
use crate::utils::validation::{
    INVALID_CODE_LENGTH_MESSAGE, INVALID_CODE_MESSAGE, INVALID_URL_MESSAGE, is_valid_code,
    is_valid_code_length, is_valid_url,
};

/// Maximum number of records returned by [`LinkService::list_recent`].
pub const LIST_LIMIT: i64 = 100;

/// Upper bound on `expires_in` (ten years).
pub const MAX_EXPIRES_IN_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Attempts at drawing an unused generated code before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Cache-aside store for short links.
///
/// Cheap to construct: it only holds two shared handles.
#[derive(Clone)]
pub struct LinkService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Creates a short link.
    ///
    /// A custom code must pass the character and length checks; otherwise a
    /// 6-character code is generated. When `ttl_seconds` is given the record
    /// gets `expires_at = now + ttl` and the cache entry uses the same TTL.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] for a bad URL, code or TTL (before any store access)
    /// - [`AppError::Conflict`] if the code is taken, including a lost insert race
    /// - [`AppError::StoreUnavailable`] on store failure
    pub async fn create(
        &self,
        original_url: &str,
        custom_code: Option<&str>,
        ttl_seconds: Option<u64>,
    ) -> Result<UrlRecord, AppError> {
        validate_url(original_url)?;
        if let Some(code) = custom_code {
            validate_code(code)?;
        }
        if let Some(ttl) = ttl_seconds {
            validate_ttl(ttl)?;
        }

        let code = match custom_code {
            Some(code) => {
                if self.repository.find_by_code(code).await?.is_some() {
                    return Err(AppError::conflict("Short code already exists"));
                }
                code.to_string()
            }
            None => self.generate_unused_code().await?,
        };

        let new_record =
            NewUrlRecord::new(code, original_url.to_string(), Utc::now(), ttl_seconds);
        let record = self.repository.insert(new_record).await?;

        self.cache_put(&record.code, &record.original_url, ttl_seconds)
            .await;

        Ok(record)
    }

    /// Resolves a short code to its destination.
    ///
    /// A cache hit returns without touching the store. On a miss the store is
    /// read and the cache populated with the default TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn lookup(&self, code: &str) -> Result<String, AppError> {
        match self.cache.get_url(code).await {
            Ok(Some(url)) => return Ok(url),
            Ok(None) => {}
            Err(e) => warn!(error = %e, code, "Cache read failed, falling back to store"),
        }

        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        self.cache_put(&record.code, &record.original_url, None).await;

        Ok(record.original_url)
    }

    /// Replaces the destination of a short link.
    ///
    /// The cache entry is invalidated and then rewritten with the new URL.
    /// The two steps are not atomic; a concurrent lookup may briefly
    /// repopulate the old value.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] for a bad URL
    /// - [`AppError::NotFound`] if no record matches
    pub async fn update(&self, code: &str, new_url: &str) -> Result<UrlRecord, AppError> {
        validate_url(new_url)?;

        let record = self
            .repository
            .update_url(code, new_url)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        self.cache_invalidate(code).await;
        self.cache_put(code, &record.original_url, None).await;

        Ok(record)
    }

    /// Deletes a short link and drops its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches, including when
    /// the link was already deleted.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.delete(code).await? {
            return Err(AppError::not_found("Short URL not found"));
        }

        self.cache_invalidate(code).await;
        Ok(())
    }

    /// Adds one to the click counter. Failures are logged, never returned.
    pub async fn record_click(&self, code: &str) {
        match self.repository.increment_clicks(code).await {
            Ok(true) => debug!(code, "Click recorded"),
            Ok(false) => warn!(code, "Click not recorded: record vanished"),
            Err(e) => warn!(error = %e, code, "Click not recorded"),
        }
    }

    /// Reads the full record from the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    pub async fn get(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    /// Newest records first, at most [`LIST_LIMIT`].
    pub async fn list_recent(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_recent(LIST_LIMIT).await
    }

    async fn generate_unused_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let code = generate_short_code().map_err(|e| AppError::internal(e.to_string()))?;

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
            debug!(code, "Generated code collided, retrying");
        }

        Err(AppError::internal("Failed to generate unique code"))
    }

    async fn cache_put(&self, code: &str, original_url: &str, ttl_seconds: Option<u64>) {
        if let Err(e) = self.cache.set_url(code, original_url, ttl_seconds).await {
            warn!(error = %e, code, "Failed to write cache entry");
        }
    }

    async fn cache_invalidate(&self, code: &str) {
        if let Err(e) = self.cache.invalidate(code).await {
            warn!(error = %e, code, "Failed to invalidate cache entry");
        }
    }
}

fn validate_url(url: &str) -> Result<(), AppError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(AppError::bad_request(INVALID_URL_MESSAGE))
    }
}

fn validate_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(INVALID_CODE_MESSAGE));
    }
    if !is_valid_code_length(code) {
        return Err(AppError::bad_request(INVALID_CODE_LENGTH_MESSAGE));
    }
    Ok(())
}

fn validate_ttl(ttl_seconds: u64) -> Result<(), AppError> {
    if is_valid_expires_in(ttl_seconds) {
        Ok(())
    } else {
        Err(AppError::bad_request(INVALID_EXPIRES_IN_MESSAGE))
    }
}

/// Whether `ttl_seconds` is an acceptable `expires_in`.
pub fn is_valid_expires_in(ttl_seconds: u64) -> bool {
    (1..=MAX_EXPIRES_IN_SECONDS).contains(&ttl_seconds)
}

pub const INVALID_EXPIRES_IN_MESSAGE: &str =
    "Invalid expires_in: must be a positive number of seconds, at most ten years";
