use super::handlers::{
    get_meal_history::{__path_get_meal_history, get_meal_history},
    get_selection_summary::{__path_get_selection_summary, get_selection_summary},
    get_selections::{__path_get_selections, get_selections},
    override_selection::{__path_override_selection, override_selection},
    toggle_selection::{__path_toggle_selection, toggle_selection},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_selections,
    get_selection_summary,
    get_meal_history,
    toggle_selection,
    override_selection
))]
pub struct SelectionApiDoc;

pub fn selection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/selections", state.args.server.root_path),
            get(get_selections),
        )
        .route(
            &format!("{}/selections/summary", state.args.server.root_path),
            get(get_selection_summary),
        )
        .route(
            &format!("{}/selections/history", state.args.server.root_path),
            get(get_meal_history),
        )
        .route(
            &format!("{}/selections/toggle", state.args.server.root_path),
            post(toggle_selection),
        )
        .route(
            &format!("{}/selections/override", state.args.server.root_path),
            put(override_selection),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
