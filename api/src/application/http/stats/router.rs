use super::handlers::{
    get_feedback_snapshot::{__path_get_feedback_snapshot, get_feedback_snapshot},
    get_inventory_risk::{__path_get_inventory_risk, get_inventory_risk},
    get_overview::{__path_get_overview, get_overview},
    get_trendline::{__path_get_trendline, get_trendline},
    get_waste_forecast::{__path_get_waste_forecast, get_waste_forecast},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_trendline,
    get_overview,
    get_waste_forecast,
    get_inventory_risk,
    get_feedback_snapshot
))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/stats/trendline", state.args.server.root_path),
            get(get_trendline),
        )
        .route(
            &format!("{}/stats/overview", state.args.server.root_path),
            get(get_overview),
        )
        .route(
            &format!("{}/stats/waste-forecast", state.args.server.root_path),
            get(get_waste_forecast),
        )
        .route(
            &format!("{}/stats/inventory-risk", state.args.server.root_path),
            get(get_inventory_risk),
        )
        .route(
            &format!("{}/stats/feedback", state.args.server.root_path),
            get(get_feedback_snapshot),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
