use axum::extract::State;
use canteen_core::domain::stats::{ports::StatsService, value_objects::InventoryStatus};
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
pub struct GetInventoryRiskResponse {
    pub data: Vec<InventoryStatus>,
}

#[utoipa::path(
    get,
    path = "/stats/inventory-risk",
    tag = "stats",
    summary = "Get inventory restock risk",
    description = "Every inventory item with its derived risk band and par utilisation. Admin only.",
    responses(
        (status = 200, body = GetInventoryRiskResponse),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn get_inventory_risk(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetInventoryRiskResponse>, ApiError> {
    let statuses = state
        .service
        .inventory_risk(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetInventoryRiskResponse { data: statuses }))
}
