use axum::{Json, extract::State};
use canteen_core::domain::{
    menu::entities::MealType,
    selection::{ports::SelectionService, value_objects::SelectionSnapshot},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OverrideSelectionRequest {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub opted_in: bool,
}

#[utoipa::path(
    put,
    path = "/selections/override",
    tag = "selections",
    summary = "Set one meal opt-in explicitly",
    request_body = OverrideSelectionRequest,
    responses(
        (status = 200, body = SelectionSnapshot)
    )
)]
pub async fn override_selection(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<OverrideSelectionRequest>,
) -> Result<Response<SelectionSnapshot>, ApiError> {
    let snapshot = state
        .service
        .override_selection(identity, payload.date, payload.meal_type, payload.opted_in)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(snapshot))
}
