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
pub struct ToggleSelectionRequest {
    pub date: NaiveDate,
    pub meal_type: MealType,
}

#[utoipa::path(
    post,
    path = "/selections/toggle",
    tag = "selections",
    summary = "Toggle one meal opt-in",
    description = "Flip the flag for a (date, meal) pair and persist the whole state. An unseen date starts with all meals off.",
    request_body = ToggleSelectionRequest,
    responses(
        (status = 200, body = SelectionSnapshot)
    )
)]
pub async fn toggle_selection(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Json(payload): Json<ToggleSelectionRequest>,
) -> Result<Response<SelectionSnapshot>, ApiError> {
    let snapshot = state
        .service
        .toggle_selection(identity, payload.date, payload.meal_type)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(snapshot))
}
