//! In-memory cache fake.

use super::service::{CacheError, CacheResult, CacheService, DEFAULT_CACHE_TTL_SECONDS};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

struct Entry {
    url: String,
    ttl_seconds: u64,
    expires: Instant,
}

/// Process-local [`CacheService`] for tests.
///
/// Never wired into the server: the service keeps no in-process state.
/// Outages can be simulated with [`MemoryCache::set_failing`].
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    default_ttl: u64,
    failing: AtomicBool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_CACHE_TTL_SECONDS)
    }

    pub fn with_default_ttl(default_ttl: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            failing: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent operation fail until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Inserts an entry directly, bypassing the failure switch.
    pub fn seed(&self, short_code: &str, original_url: &str) {
        self.write(short_code, original_url, self.default_ttl);
    }

    /// Returns the live entry for `short_code` without touching the failure switch.
    pub fn peek(&self, short_code: &str) -> Option<String> {
        self.live_entry(short_code).map(|(url, _)| url)
    }

    /// TTL the live entry for `short_code` was written with.
    pub fn ttl_of(&self, short_code: &str) -> Option<u64> {
        self.live_entry(short_code).map(|(_, ttl)| ttl)
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::OperationError("memory cache offline".to_string()));
        }
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn live_entry(&self, short_code: &str) -> Option<(String, u64)> {
        let now = Instant::now();
        let mut entries = self.lock();
        let found = entries
            .get(short_code)
            .map(|e| (e.expires > now, e.url.clone(), e.ttl_seconds));

        match found {
            Some((true, url, ttl)) => Some((url, ttl)),
            Some((false, _, _)) => {
                entries.remove(short_code);
                None
            }
            None => None,
        }
    }

    fn write(&self, short_code: &str, original_url: &str, ttl_seconds: u64) {
        let entry = Entry {
            url: original_url.to_string(),
            ttl_seconds,
            expires: Instant::now() + Duration::from_secs(ttl_seconds),
        };
        self.lock().insert(short_code.to_string(), entry);
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        self.check()?;
        Ok(self.peek(short_code))
    }

    async fn set_url(
        &self,
        short_code: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.check()?;
        self.write(
            short_code,
            original_url,
            ttl_seconds.unwrap_or(self.default_ttl),
        );
        Ok(())
    }

    async fn invalidate(&self, short_code: &str) -> CacheResult<()> {
        self.check()?;
        self.lock().remove(short_code);
        Ok(())
    }
}
