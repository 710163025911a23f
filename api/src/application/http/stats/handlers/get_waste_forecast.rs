use axum::extract::State;
use canteen_core::domain::stats::{ports::StatsService, value_objects::WasteForecastEntry};
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
pub struct GetWasteForecastResponse {
    pub data: Vec<WasteForecastEntry>,
}

#[utoipa::path(
    get,
    path = "/stats/waste-forecast",
    tag = "stats",
    summary = "Get the waste forecast",
    description = "Predicted opt-ins, waste avoided and carbon offset for the next few menus.",
    responses(
        (status = 200, body = GetWasteForecastResponse)
    )
)]
pub async fn get_waste_forecast(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetWasteForecastResponse>, ApiError> {
    let forecast = state
        .service
        .waste_forecast(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWasteForecastResponse { data: forecast }))
}
