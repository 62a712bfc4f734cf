// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{activity, auth, contacts, crosspost, posts},
    middleware::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Rate limiting keys on the client IP, so it needs connect info; tests
/// driving the router with `oneshot` turn it off.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let mut public_writes = Router::new()
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/contact", post(contacts::submit_contact));
    if enable_rate_limiter {
        match rate_limit_layer() {
            Some(limiter) => public_writes = public_writes.layer(limiter),
            None => tracing::warn!("rate limiter misconfigured; serving without it"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .merge(public_writes)
        .route("/health", get(health))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::profile))
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/by-slug/{slug}",
            get(posts::get_post_by_slug),
        )
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/v1/posts/{id}/crosspost", post(posts::crosspost_post))
        .route("/api/v1/activity/heatmap", get(activity::heatmap))
        .route("/api/v1/contacts", get(contacts::list_contacts))
        .route("/api/v1/contacts/{id}/read", post(contacts::mark_read))
        .route(
            "/api/v1/crosspost/credentials",
            put(crosspost::save_credential).get(crosspost::connection_status),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
