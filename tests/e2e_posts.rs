// tests/e2e_posts.rs
mod support;

use axum::http::StatusCode;
use folio_core::domain::activity::ActivityKind;
use serde_json::json;
use support::{ADMIN_TOKEN, EDITOR_TOKEN, PostBuilder, TestApp, assert_error_response, read_json};

#[tokio::test]
async fn create_derives_slug_from_title_and_records_publish() {
    let app = TestApp::new().await;

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({
                "title": "Hello, World!",
                "content": "# Hi",
                "tags": ["rust", " axum ", "rust"],
                "published": true
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = read_json(resp).await;
    assert_eq!(body["post"]["slug"], "hello-world");
    assert_eq!(body["post"]["tags"], json!(["rust", "axum"]));
    assert_eq!(body["post"]["published"], true);
    assert!(body["crosspost"].is_null());

    let id = body["post"]["id"].as_i64().unwrap();
    assert_eq!(app.activity.kinds_for(id), vec![ActivityKind::Publish]);
}

#[tokio::test]
async fn draft_creation_records_no_activity() {
    let app = TestApp::new().await;

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({ "title": "Draft", "content": "wip" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(app.activity.len(), 0);
}

#[tokio::test]
async fn colliding_titles_get_numbered_slugs() {
    let app = TestApp::new().await;
    let mut slugs = Vec::new();

    for _ in 0..3 {
        let resp = app
            .post_json(
                "/api/v1/posts",
                Some(EDITOR_TOKEN),
                json!({ "title": "Same Title", "content": "body" }),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = read_json(resp).await;
        slugs.push(body["post"]["slug"].as_str().unwrap().to_string());
    }

    assert_eq!(slugs, vec!["same-title", "same-title-1", "same-title-2"]);
}

#[tokio::test]
async fn requested_slug_is_normalised() {
    let app = TestApp::new().await;

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({ "title": "Anything", "content": "body", "slug": "My Custom Slug" }),
        )
        .await;
    let body = read_json(resp).await;
    assert_eq!(body["post"]["slug"], "my-custom-slug");
}

#[tokio::test]
async fn create_requires_authentication_and_valid_input() {
    let app = TestApp::new().await;

    let resp = app
        .post_json("/api/v1/posts", None, json!({ "title": "t", "content": "c" }))
        .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({ "title": "   ", "content": "c" }),
        )
        .await;
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = app
        .post_json("/api/v1/posts", Some("forged"), json!({ "title": "t", "content": "c" }))
        .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn anonymous_listing_hides_drafts() {
    let app = TestApp::new().await;
    app.posts.seed(PostBuilder::new(1).published().build());
    app.posts.seed(PostBuilder::new(2).build());

    let resp = app.get("/api/v1/posts", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn draft_listing_requires_capability() {
    let app = TestApp::new().await;
    app.posts.seed(PostBuilder::new(1).published().build());
    app.posts.seed(PostBuilder::new(2).build());

    let resp = app.get("/api/v1/posts?include_drafts=true", None).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = app
        .get("/api/v1/posts?include_drafts=true", Some(EDITOR_TOKEN))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn listing_filters_by_tag_and_limit() {
    let app = TestApp::new().await;
    app.posts
        .seed(PostBuilder::new(1).tags(&["rust"]).published().build());
    app.posts
        .seed(PostBuilder::new(2).tags(&["go"]).published().build());
    app.posts
        .seed(PostBuilder::new(3).tags(&["rust", "web"]).published().build());

    let body = read_json(app.get("/api/v1/posts?tag=rust", None).await).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1]);

    let body = read_json(app.get("/api/v1/posts?limit=1", None).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn drafts_are_not_found_for_anonymous_readers() {
    let app = TestApp::new().await;
    app.posts.seed(PostBuilder::new(7).slug("secret").build());

    let resp = app.get("/api/v1/posts/7", None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = app.get("/api/v1/posts/by-slug/secret", None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = app.get("/api/v1/posts/7", Some(EDITOR_TOKEN)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn slug_lookup_finds_published_posts() {
    let app = TestApp::new().await;
    app.posts
        .seed(PostBuilder::new(3).slug("rust-tips").published().build());

    let resp = app.get("/api/v1/posts/by-slug/rust-tips", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["id"], 3);

    let resp = app.get("/api/v1/posts/by-slug/Not_A_Slug", None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn editing_title_keeps_slug_until_new_slug_requested() {
    let app = TestApp::new().await;
    app.posts
        .seed(PostBuilder::new(1).title("Old").slug("old").build());
    app.posts.seed(PostBuilder::new(2).slug("taken").build());

    let resp = app
        .put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "title": "New" }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["title"], "New");
    assert_eq!(body["slug"], "old");

    let resp = app
        .put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "slug": "taken" }))
        .await;
    let body = read_json(resp).await;
    assert_eq!(body["slug"], "taken-1");

    let resp = app
        .put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "slug": "taken-1" }))
        .await;
    let body = read_json(resp).await;
    assert_eq!(body["slug"], "taken-1");
}

#[tokio::test]
async fn publishing_and_editing_record_activity() {
    let app = TestApp::new().await;
    app.posts.seed(PostBuilder::new(1).build());

    app.put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "content": "draft edit" }))
        .await;
    assert!(app.activity.kinds_for(1).is_empty());

    let resp = app
        .put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "published": true }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(app.activity.kinds_for(1), vec![ActivityKind::Publish]);

    app.put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "content": "fix typo" }))
        .await;
    assert_eq!(
        app.activity.kinds_for(1),
        vec![ActivityKind::Publish, ActivityKind::Update]
    );

    app.put_json("/api/v1/posts/1", Some(EDITOR_TOKEN), json!({ "published": false }))
        .await;
    assert_eq!(app.activity.kinds_for(1).len(), 2);
}

#[tokio::test]
async fn activity_failure_does_not_fail_the_write() {
    let app = TestApp::new().await;
    app.activity.fail_writes(true);

    let resp = app
        .post_json(
            "/api/v1/posts",
            Some(EDITOR_TOKEN),
            json!({ "title": "Still saved", "content": "c", "published": true }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(app.posts.len(), 1);
}

#[tokio::test]
async fn update_of_missing_post_is_not_found() {
    let app = TestApp::new().await;
    let resp = app
        .put_json("/api/v1/posts/99", Some(EDITOR_TOKEN), json!({ "title": "x" }))
        .await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn only_admins_delete() {
    let app = TestApp::new().await;
    app.posts.seed(PostBuilder::new(1).published().build());

    let resp = app.delete("/api/v1/posts/1", Some(EDITOR_TOKEN)).await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;

    let resp = app.delete("/api/v1/posts/1", Some(ADMIN_TOKEN)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.delete("/api/v1/posts/1", Some(ADMIN_TOKEN)).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}
