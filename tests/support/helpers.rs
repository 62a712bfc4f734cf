// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use folio_core::application::services::{ApplicationServices, ServiceDependencies};
use folio_core::domain::user::{NewUser, PasswordHash, Role, UserRepository, Username};
use folio_core::infrastructure::security::session_store::InMemorySessionRevocationStore;
use folio_core::infrastructure::util::DefaultSlugGenerator;
use folio_core::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use tower::ServiceExt;

use super::mocks::{
    CapturingNotifier, FIXED_NOW, FakePasswordHasher, FakePublisher, FakeTokenManager,
    FixedClock, InMemoryActivity, InMemoryContacts, InMemoryCredentials, InMemoryPosts,
    InMemoryUsers,
};

pub const ADMIN_PASSWORD: &str = "Admin-Password-1";
pub const EDITOR_PASSWORD: &str = "Editor-Password-1";
pub const JST_OFFSET_MINUTES: i32 = 540;

/// Router plus handles on every in-memory collaborator behind it.
pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub posts: Arc<InMemoryPosts>,
    pub activity: Arc<InMemoryActivity>,
    pub contacts: Arc<InMemoryContacts>,
    pub users: Arc<InMemoryUsers>,
    pub credentials: Arc<InMemoryCredentials>,
    pub notifier: Arc<CapturingNotifier>,
    pub publisher: Arc<FakePublisher>,
}

impl TestApp {
    /// Seeds an admin (id 1) and an editor (id 2).
    pub async fn new() -> Self {
        let posts = Arc::new(InMemoryPosts::default());
        let activity = Arc::new(InMemoryActivity::default());
        let contacts = Arc::new(InMemoryContacts::default());
        let users = Arc::new(InMemoryUsers::default());
        let credentials = Arc::new(InMemoryCredentials::default());
        let notifier = Arc::new(CapturingNotifier::default());
        let publisher = Arc::new(FakePublisher::default());

        seed_user(&users, "admin", ADMIN_PASSWORD, Role::Admin).await;
        seed_user(&users, "editor", EDITOR_PASSWORD, Role::Editor).await;

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            user_repo: users.clone(),
            post_write_repo: posts.clone(),
            post_read_repo: posts.clone(),
            activity_repo: activity.clone(),
            contact_repo: contacts.clone(),
            credential_repo: credentials.clone(),
            password_hasher: Arc::new(FakePasswordHasher),
            token_manager: Arc::new(FakeTokenManager::default()),
            session_revocation_store: Arc::new(InMemorySessionRevocationStore::new()),
            notifier: notifier.clone(),
            publisher: publisher.clone(),
            clock: Arc::new(FixedClock),
            slugger: Arc::new(DefaultSlugGenerator),
            activity_offset_minutes: JST_OFFSET_MINUTES,
        }));

        let state = HttpState::new(
            Arc::clone(&services),
            &["http://localhost:3000".to_string()],
        );
        let router = build_router_with_rate_limiter(state, false);

        Self {
            router,
            services,
            posts,
            activity,
            contacts,
            users,
            credentials,
            notifier,
            publisher,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::GET, uri, token, None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(request(Method::POST, uri, token, Some(body))).await
    }

    pub async fn put_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(request(Method::PUT, uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::DELETE, uri, token, None)).await
    }
}

async fn seed_user(users: &InMemoryUsers, username: &str, password: &str, role: Role) {
    let new_user = NewUser::new(
        Username::new(username).unwrap(),
        PasswordHash::new(format!("hashed:{password}")).unwrap(),
        role,
        *FIXED_NOW,
    );
    users.insert(new_user).await.unwrap();
}

pub async fn make_test_router() -> Router {
    TestApp::new().await.router
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
