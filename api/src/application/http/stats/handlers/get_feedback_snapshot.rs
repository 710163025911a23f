use axum::extract::State;
use canteen_core::domain::stats::{ports::StatsService, value_objects::FeedbackSnapshot};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/stats/feedback",
    tag = "stats",
    summary = "Get the feedback snapshot",
    description = "Average rating over the most recent feedback entries. Admin only.",
    responses(
        (status = 200, body = FeedbackSnapshot),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn get_feedback_snapshot(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<FeedbackSnapshot>, ApiError> {
    let snapshot = state
        .service
        .feedback_snapshot(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(snapshot))
}
