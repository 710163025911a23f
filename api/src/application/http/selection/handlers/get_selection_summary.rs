use axum::extract::State;
use canteen_core::domain::selection::{ports::SelectionService, value_objects::SelectionSummary};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/selections/summary",
    tag = "selections",
    summary = "Get the caller's selection summary",
    description = "Total opted meals and distinct scheduled days.",
    responses(
        (status = 200, body = SelectionSummary)
    )
)]
pub async fn get_selection_summary(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SelectionSummary>, ApiError> {
    let snapshot = state
        .service
        .selections(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(snapshot.summary))
}
