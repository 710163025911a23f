use super::handlers::login::{__path_login, login};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(login))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/auth/login", state.args.server.root_path),
        post(login),
    )
}
