use axum::extract::State;
use canteen_core::domain::announcement::{
    entities::Announcement, ports::AnnouncementService,
};
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
pub struct GetAnnouncementsResponse {
    pub data: Vec<Announcement>,
}

#[utoipa::path(
    get,
    path = "/announcements",
    tag = "announcements",
    summary = "List announcements for the caller",
    description = "Announcements whose audience covers the caller's role, newest first.",
    responses(
        (status = 200, body = GetAnnouncementsResponse)
    )
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetAnnouncementsResponse>, ApiError> {
    let announcements = state
        .service
        .announcements_for(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnnouncementsResponse {
        data: announcements,
    }))
}
