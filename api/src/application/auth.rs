use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use canteen_core::domain::{
    authentication::value_objects::Identity, session::services::decode_session_token,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Best-effort session middleware: a valid bearer token puts an [`Identity`]
/// into the request extensions, anything else passes through untouched.
/// Handlers that need a caller use [`RequiredIdentity`] to reject with 401.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(header) = req.headers().get("authorization")
        && let Ok(value) = header.to_str()
        && let Some(token) = value.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        match decode_session_token(token, &state.args.session.secret) {
            Ok(claims) => {
                req.extensions_mut().insert(Identity::from(claims));
            }
            Err(err) => {
                debug!(error = %err, "ignoring invalid session token");
            }
        }
    }

    Ok(next.run(req).await)
}

/// Extractor for handlers that require an authenticated caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized("authentication required".to_string()))?;

        let app_state = AppState::from_ref(state);
        let claims = decode_session_token(bearer.token(), &app_state.args.session.secret)
            .map_err(ApiError::from)?;

        let identity = Identity::from(claims);
        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}
