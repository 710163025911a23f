use axum::extract::State;
use canteen_core::domain::selection::{entities::EmployeeMealHistory, ports::SelectionService};
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
pub struct GetMealHistoryResponse {
    /// `null` when nothing has been recorded for the caller.
    pub data: Option<EmployeeMealHistory>,
}

#[utoipa::path(
    get,
    path = "/selections/history",
    tag = "selections",
    summary = "Get the caller's meal history",
    responses(
        (status = 200, body = GetMealHistoryResponse)
    )
)]
pub async fn get_meal_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMealHistoryResponse>, ApiError> {
    let history = state
        .service
        .meal_history(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealHistoryResponse { data: history }))
}
