// src/presentation/http/controllers/contacts.rs
use crate::application::{
    commands::contacts::{MarkContactReadCommand, SubmitContactCommand},
    dto::ContactDto,
    queries::contacts::ListContactsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactAccepted {
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ContactListParams {
    /// `unread` or `read`.
    #[serde(default)]
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Message delivered to the site owner.", body = ContactAccepted),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions."),
        (status = 500, description = "Delivery failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactAccepted>)> {
    let command = SubmitContactCommand {
        name: payload.name,
        email: payload.email,
        message: payload.message,
    };

    state
        .services
        .contact_commands
        .submit_contact(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ContactAccepted {
            status: "sent".into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    params(ContactListParams),
    responses(
        (status = 200, description = "Messages, newest first.", body = [ContactDto]),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 403, body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact"
)]
pub async fn list_contacts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ContactListParams>,
) -> HttpResult<Json<Vec<ContactDto>>> {
    state
        .services
        .contact_queries
        .list_contacts(
            &user,
            ListContactsQuery {
                status: params.status,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/contacts/{id}/read",
    params(("id" = i64, Path, description = "Contact message id")),
    responses(
        (status = 200, body = ContactDto),
        (status = 403, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact"
)]
pub async fn mark_read(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactDto>> {
    state
        .services
        .contact_commands
        .mark_read(&user, MarkContactReadCommand { id })
        .await
        .into_http()
        .map(Json)
}
