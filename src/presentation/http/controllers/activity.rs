// src/presentation/http/controllers/activity.rs
use crate::application::{dto::ActivityHeatmapDto, queries::activity::ActivityHeatmapQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct HeatmapParams {
    /// First calendar day, `YYYY-MM-DD`.
    pub start: String,
    /// Last calendar day (inclusive), `YYYY-MM-DD`.
    pub end: String,
    /// Minutes east of UTC; the server default applies when omitted.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/v1/activity/heatmap",
    params(HeatmapParams),
    responses(
        (status = 200, description = "Daily publish and update counts.", body = ActivityHeatmapDto),
        (status = 400, body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Activity"
)]
pub async fn heatmap(
    Extension(state): Extension<HttpState>,
    Query(params): Query<HeatmapParams>,
) -> HttpResult<Json<ActivityHeatmapDto>> {
    let query = ActivityHeatmapQuery {
        start: params.start,
        end: params.end,
        utc_offset_minutes: params.utc_offset_minutes,
    };

    state
        .services
        .activity_queries
        .heatmap(query)
        .await
        .into_http()
        .map(Json)
}
