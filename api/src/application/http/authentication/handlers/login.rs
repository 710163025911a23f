use axum::extract::State;
use canteen_core::domain::{
    authentication::{ports::AuthService, value_objects::Identity},
    session::services::issue_session_token,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::validators::LoginValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "authentication",
    summary = "Sign in",
    description = "Verify a credential pair and issue a 24-hour session token. Unknown emails and wrong passwords are indistinguishable in the response.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let identity = state
        .service
        .authenticate(&payload.email, &payload.password)
        .await
        .map_err(ApiError::from)?;

    let token = issue_session_token(&identity, &state.args.session.secret)
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse {
        token,
        user: identity,
    }))
}
