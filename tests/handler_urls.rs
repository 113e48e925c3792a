mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use short_links::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_list_urls_empty() {
    let app = common::spawn_app();

    let response = app.server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 0);
    assert_eq!(json["urls"], json!([]));
}

#[tokio::test]
async fn test_list_urls_newest_first() {
    let app = common::spawn_app();
    let now = Utc::now();
    common::create_test_link_at(&app.repo, "old", "https://example.com/1", now - Duration::hours(2)).await;
    common::create_test_link_at(&app.repo, "new", "https://example.com/3", now).await;
    common::create_test_link_at(&app.repo, "mid", "https://example.com/2", now - Duration::hours(1)).await;

    let response = app.server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 3);

    let codes: Vec<&str> = json["urls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn test_list_urls_capped_at_100() {
    let app = common::spawn_app();
    let now = Utc::now();
    for i in 0..105 {
        common::create_test_link_at(
            &app.repo,
            &format!("code{i}"),
            "https://example.com",
            now + Duration::seconds(i),
        )
        .await;
    }

    let response = app.server.get("/api/urls").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 100);
    assert_eq!(json["urls"].as_array().unwrap().len(), 100);
    assert_eq!(json["urls"][0]["code"], "code104");
}

#[tokio::test]
async fn test_get_url_record() {
    let app = common::spawn_app();
    let record = common::create_test_link(&app.repo, "zig", "https://ziglang.org").await;

    let response = app.server.get("/api/urls/zig").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], record.id);
    assert_eq!(json["code"], "zig");
    assert_eq!(json["original_url"], "https://ziglang.org");
    assert_eq!(json["clicks"], 0);
    assert!(json["created_at"].is_string());
    assert!(json["expires_at"].is_null());
}

#[tokio::test]
async fn test_get_url_not_found() {
    let app = common::spawn_app();

    let response = app.server.get("/api/urls/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Short URL not found"
    );
}

#[tokio::test]
async fn test_update_url() {
    let app = common::spawn_app();
    common::create_test_link(&app.repo, "zig", "https://ziglang.org").await;
    app.cache.seed("zig", "https://ziglang.org");

    let response = app
        .server
        .put("/api/urls/zig")
        .json(&json!({ "url": "https://newsite.org" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["code"], "zig");
    assert_eq!(json["original_url"], "https://newsite.org");

    let stored = app.repo.find_by_code("zig").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "https://newsite.org");
    assert_eq!(app.cache.peek("zig").as_deref(), Some("https://newsite.org"));
}

#[tokio::test]
async fn test_update_url_invalid() {
    let app = common::spawn_app();
    common::create_test_link(&app.repo, "zig", "https://ziglang.org").await;

    let response = app
        .server
        .put("/api/urls/zig")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let stored = app.repo.find_by_code("zig").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "https://ziglang.org");
}

#[tokio::test]
async fn test_update_url_not_found() {
    let app = common::spawn_app();

    let response = app
        .server
        .put("/api/urls/nope")
        .json(&json!({ "url": "https://newsite.org" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.cache.peek("nope"), None);
}

#[tokio::test]
async fn test_delete_url() {
    let app = common::spawn_app();
    common::create_test_link(&app.repo, "zig", "https://ziglang.org").await;
    app.cache.seed("zig", "https://ziglang.org");

    let response = app.server.delete("/api/urls/zig").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("zig"));

    assert!(app.repo.is_empty());
    assert_eq!(app.cache.peek("zig"), None);
}

#[tokio::test]
async fn test_delete_url_twice() {
    let app = common::spawn_app();
    common::create_test_link(&app.repo, "zig", "https://ziglang.org").await;

    app.server.delete("/api/urls/zig").await.assert_status_ok();

    let response = app.server.delete("/api/urls/zig").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_urls_store_not_configured() {
    let server = common::spawn_unconfigured_app();

    server
        .get("/api/urls")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    server
        .get("/api/urls/zig")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    server
        .delete("/api/urls/zig")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_missing_code_is_json_bad_request() {
    let app = common::spawn_app();

    let responses = [
        app.server.get("/api/stats").await,
        app.server.get("/api/stats/").await,
        app.server.delete("/api/urls").await,
        app.server
            .put("/api/urls")
            .json(&json!({ "url": "https://newsite.org" }))
            .await,
    ];

    for response in responses {
        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing short code");
    }
}

#[tokio::test]
async fn test_blank_code_is_bad_request() {
    let app = common::spawn_app();

    let response = app.server.get("/api/urls/%20").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Missing short code"
    );
}

#[tokio::test]
async fn test_unknown_api_route_is_json_not_found() {
    let app = common::spawn_app();

    let response = app.server.get("/api/unknown/route").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Route not found");
}

#[tokio::test]
async fn test_wrong_method_is_json_method_not_allowed() {
    let app = common::spawn_app();

    let response = app.server.get("/api/shorten").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}
