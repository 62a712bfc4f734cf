// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::{
        crosspost::CrosspostPostCommand,
        posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    },
    dto::{CreatePostResultDto, CrosspostResultDto, PostDto},
    queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// Requires `posts:view:drafts`.
    #[serde(default)]
    pub include_drafts: bool,
    #[serde(default)]
    pub tag: Option<String>,
    /// Defaults to 20, capped at 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    /// Derived from the title when omitted or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    /// Mirror the post to the connected platform after saving.
    #[serde(default)]
    pub crosspost: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Posts, newest first.", body = [PostDto]),
        (status = 401, description = "Drafts requested anonymously.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller may not view drafts.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Vec<PostDto>>> {
    let query = ListPostsQuery {
        include_drafts: params.include_drafts,
        tag: params.tag,
        limit: params.limit,
    };

    state
        .services
        .post_queries
        .list_posts(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, body = PostDto),
        (status = 404, description = "Missing, or a draft the caller may not see.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(actor.0.as_ref(), GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Kebab-case slug")),
    responses(
        (status = 200, body = PostDto),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(actor.0.as_ref(), GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post saved. A failed cross-post is reported in `crosspost.warning`.", body = CreatePostResultDto),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No free slug after retries.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<CreatePostResultDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        tags: payload.tags,
        published: payload.published,
        crosspost: payload.crosspost,
    };

    let created = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, body = PostDto),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse),
        (status = 409, body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        tags: payload.tags,
        published: payload.published,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, body = DeletedResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/crosspost",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Canonical URL on the external platform.", body = CrosspostResultDto),
        (status = 400, description = "Account not connected or post has no tags.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "External platform rejected the post.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn crosspost_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CrosspostResultDto>> {
    state
        .services
        .crosspost_commands
        .crosspost_post(&user, CrosspostPostCommand { id })
        .await
        .into_http()
        .map(Json)
}
