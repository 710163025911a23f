use super::handlers::get_announcements::{__path_get_announcements, get_announcements};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_announcements))]
pub struct AnnouncementApiDoc;

pub fn announcement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/announcements", state.args.server.root_path),
            get(get_announcements),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
