// src/presentation/http/controllers/crosspost.rs
use crate::application::{
    commands::crosspost::SaveCrosspostCredentialCommand, dto::CrosspostConnectionDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SaveCredentialRequest {
    pub access_token: String,
}

impl std::fmt::Debug for SaveCredentialRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveCredentialRequest")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/crosspost/credentials",
    request_body = SaveCredentialRequest,
    responses(
        (status = 200, body = CrosspostConnectionDto),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Crosspost"
)]
pub async fn save_credential(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<SaveCredentialRequest>,
) -> HttpResult<Json<CrosspostConnectionDto>> {
    let command = SaveCrosspostCredentialCommand {
        access_token: payload.access_token,
    };

    state
        .services
        .crosspost_commands
        .save_credential(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/crosspost/credentials",
    responses(
        (status = 200, description = "Whether a token is stored. The token itself is never returned.", body = CrosspostConnectionDto),
        (status = 403, body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Crosspost"
)]
pub async fn connection_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<CrosspostConnectionDto>> {
    state
        .services
        .crosspost_commands
        .connection_status(&user)
        .await
        .into_http()
        .map(Json)
}
