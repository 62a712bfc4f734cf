// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const LOCAL_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::crosspost_post,
        crate::presentation::http::controllers::activity::heatmap,
        crate::presentation::http::controllers::contacts::submit_contact,
        crate::presentation::http::controllers::contacts::list_contacts,
        crate::presentation::http::controllers::contacts::mark_read,
        crate::presentation::http::controllers::crosspost::save_credential,
        crate::presentation::http::controllers::crosspost::connection_status,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::DeletedResponse,
            crate::presentation::http::controllers::contacts::ContactRequest,
            crate::presentation::http::controllers::contacts::ContactAccepted,
            crate::presentation::http::controllers::crosspost::SaveCredentialRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::PostDto,
            crate::application::dto::CreatePostResultDto,
            crate::application::dto::CrosspostResultDto,
            crate::application::dto::CrosspostConnectionDto,
            crate::application::dto::ContactDto,
            crate::application::dto::ActivityHeatmapDto,
            crate::application::dto::ActivityDayDto
        )
    ),
    tags(
        (name = "Auth", description = "Login, logout and profile"),
        (name = "Posts", description = "Blog posts and cross-posting"),
        (name = "Activity", description = "Publishing activity heatmap"),
        (name = "Contact", description = "Visitor contact messages"),
        (name = "Crosspost", description = "External platform connection"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Folio API",
        description = "Portfolio blog backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        for url in server_urls(env::var("PUBLIC_API_URLS").ok().as_deref()) {
            servers.push(Server::new(url));
        }
    }
}

/// Comma-separated public URLs, trailing slashes dropped, deduplicated,
/// with the local development server always last.
fn server_urls(raw: Option<&str>) -> Vec<String> {
    let mut urls: Vec<String> = raw
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.trim_end_matches('/').to_string())
                .collect()
        })
        .unwrap_or_default();
    urls.push(LOCAL_SERVER_URL.to_string());

    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
    urls
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and return the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
