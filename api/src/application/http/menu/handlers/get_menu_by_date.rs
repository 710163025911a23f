use axum::extract::{Path, State};
use canteen_core::domain::menu::{entities::DayMenu, ports::MenuService};
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

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMenuResponse {
    pub data: DayMenu,
}

#[utoipa::path(
    get,
    path = "/menus/{date}",
    tag = "menus",
    summary = "Get the menu of a day",
    params(
        ("date" = String, Path, description = "Calendar day, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = GetMenuResponse),
        (status = 404, description = "No menu planned for that day")
    )
)]
pub async fn get_menu_by_date(
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
    Path(date): Path<NaiveDate>,
) -> Result<Response<GetMenuResponse>, ApiError> {
    let menu = state
        .service
        .menu_by_date(date)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("no menu planned for {date}")))?;

    Ok(Response::OK(GetMenuResponse { data: menu }))
}
