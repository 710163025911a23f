use super::handlers::{
    get_menu_by_date::{__path_get_menu_by_date, get_menu_by_date},
    get_menus::{__path_get_menus, get_menus},
    get_next_menu::{__path_get_next_menu, get_next_menu},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_menus, get_next_menu, get_menu_by_date))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menus", state.args.server.root_path),
            get(get_menus),
        )
        .route(
            &format!("{}/menus/next", state.args.server.root_path),
            get(get_next_menu),
        )
        .route(
            &format!("{}/menus/{{date}}", state.args.server.root_path),
            get(get_menu_by_date),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
