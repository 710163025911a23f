use axum::extract::State;
use canteen_core::domain::{
    menu::entities::MealType,
    stats::{ports::StatsService, value_objects::OptInOverview},
};
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
pub struct GetOverviewResponse {
    pub recorded_meals: u32,
    pub preferred_meals: Vec<MealType>,
    pub participation_rate: f64,
}

impl From<OptInOverview> for GetOverviewResponse {
    fn from(overview: OptInOverview) -> Self {
        Self {
            recorded_meals: overview.recorded_meals,
            preferred_meals: overview.preferred_meals,
            participation_rate: overview.participation_rate,
        }
    }
}

#[utoipa::path(
    get,
    path = "/stats/overview",
    tag = "stats",
    summary = "Get the caller's opt-in overview",
    description = "Participation rate and preferred meals over the caller's recent history. Zeroed when no history exists.",
    responses(
        (status = 200, body = GetOverviewResponse)
    )
)]
pub async fn get_overview(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetOverviewResponse>, ApiError> {
    let overview = state
        .service
        .opt_in_overview(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOverviewResponse::from(overview)))
}
