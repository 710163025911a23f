use axum::extract::{Query, State};
use canteen_core::domain::menu::{entities::DayMenu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetMenusQuery {
    /// Cap on the number of upcoming menus returned.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenusResponse {
    pub data: Vec<DayMenu>,
}

#[utoipa::path(
    get,
    path = "/menus",
    tag = "menus",
    summary = "List upcoming menus",
    description = "Day menus sorted ascending by date.",
    params(GetMenusQuery),
    responses(
        (status = 200, body = GetMenusResponse)
    )
)]
pub async fn get_menus(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    Query(query): Query<GetMenusQuery>,
) -> Result<Response<GetMenusResponse>, ApiError> {
    let menus = state
        .service
        .upcoming_menus(query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMenusResponse { data: menus }))
}
