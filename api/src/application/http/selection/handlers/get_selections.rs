use axum::extract::State;
use canteen_core::domain::selection::{ports::SelectionService, value_objects::SelectionSnapshot};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/selections",
    tag = "selections",
    summary = "Get the caller's meal selections",
    description = "The hydrated per-user opt-in state plus its derived summary. First use adopts the caller's standing preferences applied to every upcoming menu date.",
    responses(
        (status = 200, body = SelectionSnapshot)
    )
)]
pub async fn get_selections(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SelectionSnapshot>, ApiError> {
    let snapshot = state
        .service
        .selections(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(snapshot))
}
