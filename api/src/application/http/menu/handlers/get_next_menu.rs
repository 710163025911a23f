use axum::extract::State;
use canteen_core::domain::menu::{entities::DayMenu, ports::MenuService};
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
pub struct GetNextMenuResponse {
    /// `null` when no menu is planned on or after today.
    pub data: Option<DayMenu>,
}

#[utoipa::path(
    get,
    path = "/menus/next",
    tag = "menus",
    summary = "Get the next menu",
    description = "The first menu on or after today, if any.",
    responses(
        (status = 200, body = GetNextMenuResponse)
    )
)]
pub async fn get_next_menu(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<GetNextMenuResponse>, ApiError> {
    let menu = state.service.next_menu().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetNextMenuResponse { data: menu }))
}
