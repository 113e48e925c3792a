//! PostgreSQL repository tests. Each test gets a fresh database with
//! migrations applied; run with `cargo test -- --ignored` and `DATABASE_URL` set.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use short_links::domain::entities::NewUrlRecord;
use short_links::domain::repositories::UrlRepository;
use short_links::error::AppError;
use short_links::infrastructure::persistence::PgUrlRepository;

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord::new(code.to_string(), url.to_string(), Utc::now(), None)
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let created = repo
        .insert(new_record("test123", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(created.code, "test123");
    assert_eq!(created.original_url, "https://example.com");
    assert_eq!(created.clicks, 0);

    let found = repo.find_by_code("test123").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_duplicate_code(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(new_record("dup", "https://example.com/1"))
        .await
        .unwrap();
    let result = repo.insert(new_record("dup", "https://example.com/2")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_with_expiry(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = NewUrlRecord::new(
        "ttl".to_string(),
        "https://example.com".to_string(),
        Utc::now(),
        Some(3600),
    );
    let created = repo.insert(record).await.unwrap();

    let expires_at = created.expires_at.unwrap();
    assert_eq!((expires_at - created.created_at).num_seconds(), 3600);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("upd", "https://example.com/old"))
        .await
        .unwrap();

    let updated = repo
        .update_url("upd", "https://example.com/new")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.original_url, "https://example.com/new");

    assert!(repo.update_url("missing", "https://x.org").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("del", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.delete("del").await.unwrap());
    assert!(!repo.delete("del").await.unwrap());
    assert!(repo.find_by_code("del").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("clk", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.increment_clicks("clk").await.unwrap());
    assert!(repo.increment_clicks("clk").await.unwrap());
    assert!(!repo.increment_clicks("missing").await.unwrap());

    let record = repo.find_by_code("clk").await.unwrap().unwrap();
    assert_eq!(record.clicks, 2);
    assert_eq!(repo.total_clicks().await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_recent(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let now = Utc::now();

    for (i, code) in ["first", "second", "third"].iter().enumerate() {
        let mut record = new_record(code, "https://example.com");
        record.created_at = now + Duration::seconds(i as i64);
        repo.insert(record).await.unwrap();
    }

    let records = repo.list_recent(2).await.unwrap();
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["third", "second"]);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_counts(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let now = Utc::now();

    repo.insert(new_record("live", "https://example.com"))
        .await
        .unwrap();

    let mut expired = new_record("expired", "https://example.com");
    expired.expires_at = Some(now - Duration::hours(1));
    repo.insert(expired).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
    assert_eq!(repo.count_expired().await.unwrap(), 1);
    assert_eq!(repo.total_clicks().await.unwrap(), 0);
}
