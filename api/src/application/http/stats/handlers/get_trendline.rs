use axum::extract::State;
use canteen_core::domain::stats::{ports::StatsService, value_objects::TrendPoint};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTrendlineResponse {
    pub data: Vec<TrendPoint>,
}

#[utoipa::path(
    get,
    path = "/stats/trendline",
    tag = "stats",
    summary = "Get the participation trendline",
    description = "Organisation-wide opt-in rate per day, ascending by date.",
    responses(
        (status = 200, body = GetTrendlineResponse)
    )
)]
pub async fn get_trendline(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetTrendlineResponse>, ApiError> {
    let trendline = state
        .service
        .aggregate_trendline(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTrendlineResponse { data: trendline }))
}
