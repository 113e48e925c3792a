#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, Utc};
use short_links::domain::entities::{NewUrlRecord, UrlRecord};
use short_links::domain::repositories::UrlRepository;
use short_links::infrastructure::cache::MemoryCache;
use short_links::infrastructure::persistence::MemoryUrlRepository;
use short_links::routes::router;
use short_links::state::AppState;
use std::sync::Arc;

/// Router over in-memory stores, with handles kept for assertions.
pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<MemoryUrlRepository>,
    pub cache: Arc<MemoryCache>,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with_base_url(None)
}

pub fn spawn_app_with_base_url(base_url: Option<&str>) -> TestApp {
    let repo = Arc::new(MemoryUrlRepository::new());
    let cache = Arc::new(MemoryCache::new());

    let state = AppState::new(
        Some(repo.clone()),
        Some(cache.clone()),
        base_url.map(str::to_string),
    );

    TestApp {
        server: TestServer::new(router(state)).unwrap(),
        repo,
        cache,
    }
}

/// Router whose state has neither store configured.
pub fn spawn_unconfigured_app() -> TestServer {
    TestServer::new(router(AppState::new(None, None, None))).unwrap()
}

pub async fn create_test_link(repo: &MemoryUrlRepository, code: &str, url: &str) -> UrlRecord {
    repo.insert(NewUrlRecord::new(
        code.to_string(),
        url.to_string(),
        Utc::now(),
        None,
    ))
    .await
    .unwrap()
}

pub async fn create_test_link_at(
    repo: &MemoryUrlRepository,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> UrlRecord {
    repo.insert(NewUrlRecord::new(
        code.to_string(),
        url.to_string(),
        created_at,
        None,
    ))
    .await
    .unwrap()
}
