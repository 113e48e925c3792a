//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Handles to the two external stores plus presentation settings.
///
/// Either store handle may be absent when the deployment did not configure
/// it. Handlers then fail with "Store not configured" instead of a 404.
#[derive(Clone)]
pub struct AppState {
    pub repository: Option<Arc<dyn UrlRepository>>,
    pub cache: Option<Arc<dyn CacheService>>,
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(
        repository: Option<Arc<dyn UrlRepository>>,
        cache: Option<Arc<dyn CacheService>>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            repository,
            cache,
            base_url,
        }
    }

    /// Builds the cache-aside service over the configured stores.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if either store is missing.
    pub fn link_service(&self) -> Result<LinkService, AppError> {
        match (&self.repository, &self.cache) {
            (Some(repository), Some(cache)) => {
                Ok(LinkService::new(repository.clone(), cache.clone()))
            }
            _ => Err(AppError::store_not_configured()),
        }
    }

    /// Public short URL for `code`, when a base URL is configured.
    pub fn short_url(&self, code: &str) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), code))
    }
}
