// tests/e2e_crosspost.rs
mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{ADMIN_TOKEN, EDITOR_TOKEN, PostBuilder, TestApp, assert_error_response, read_json};

async fn connect(app: &TestApp, token: &str) {
    let resp = app
        .put_json(
            "/api/v1/crosspost/credentials",
            Some(token),
            json!({ "access_token": "qiita-secret" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn connection_status_never_exposes_the_token() {
    let app = TestApp::new().await;

    let body = read_json(app.get("/api/v1/crosspost/credentials", Some(EDITOR_TOKEN)).await).await;
    assert_eq!(body["connected"], false);

    connect(&app, EDITOR_TOKEN).await;

    let resp = app.get("/api/v1/crosspost/credentials", Some(EDITOR_TOKEN)).await;
    let body = read_json(resp).await;
    assert_eq!(body["connected"], true);
    assert!(!body.to_string().contains("qiita-secret"));

    let resp = app
        .put_json(
            "/api/v1/crosspost/credentials",
            Some(EDITOR_TOKEN),
            json!({ "access_token": "  " }),
        )
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn existing_post_is_crossposted_with_stored_token() {
    let app = TestApp::new().await;
    app.posts
        .seed(PostBuilder::new(1).title("Rust tips").tags(&["rust", "tips"]).published().build());
    connect(&app, ADMIN_TOKEN).await;

    let resp = app
        .post_json("/api/v1/posts/1/crosspost", Some(ADMIN_TOKEN), json!({}))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["url"], "https://qiita.com/folio/items/1");

    let calls = app.publisher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "qiita-secret");
    assert_eq!(calls[0].1.title, "Rust tips");
    assert_eq!(calls[0].1.tags, vec!["rust", "tips"]);
    assert!(!calls[0].1.private);
}

#[tokio::test]
async fn crosspost_preconditions_are_validated() {
    let app = TestApp::new().await;
    app.posts.seed(PostBuilder::new(1).tags(&["rust"]).build());
    app.posts.seed(PostBuilder::new(2).build());

    let resp = app
        .post_json("/api/v1/posts/1/crosspost", Some(ADMIN_TOKEN), json!({}))
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    connect(&app, ADMIN_TOKEN).await;
    let resp = app
        .post_json("/api/v1/posts/2/crosspost", Some(ADMIN_TOKEN), json!({}))
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = app
        .post_json("/api/v1/posts/9/crosspost", Some(ADMIN_TOKEN), json!({}))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    assert!(app.publisher.calls().is_empty());
}

#[tokio::test]
async fn create_with_crosspost_returns_url() {
    let app = TestApp::new().await;
    connect(&app, EDITOR_TOKEN).await;

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({
                "title": "Mirrored",
                "content": "body",
                "tags": ["rust"],
                "published": true,
                "crosspost": true
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["crosspost"]["url"], "https://qiita.com/folio/items/1");
    assert!(body["crosspost"]["warning"].is_null());
}

#[tokio::test]
async fn failed_crosspost_keeps_the_saved_post() {
    let app = TestApp::new().await;
    connect(&app, EDITOR_TOKEN).await;
    app.publisher.fail(true);

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({
                "title": "Saved anyway",
                "content": "body",
                "tags": ["rust"],
                "published": true,
                "crosspost": true
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["post"]["slug"], "saved-anyway");
    assert!(body["crosspost"]["url"].is_null());
    let warning = body["crosspost"]["warning"].as_str().unwrap();
    assert!(warning.contains("401"), "{warning}");
    assert_eq!(app.posts.len(), 1);
}

#[tokio::test]
async fn untagged_post_with_crosspost_is_saved_with_warning() {
    let app = TestApp::new().await;
    connect(&app, EDITOR_TOKEN).await;

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({ "title": "No tags", "content": "body", "crosspost": true }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert!(body["crosspost"]["warning"].is_string());
    assert!(app.publisher.calls().is_empty());
}
