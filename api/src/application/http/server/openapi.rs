use utoipa::OpenApi;

use crate::application::http::{
    announcement::router::AnnouncementApiDoc, authentication::router::AuthenticationApiDoc,
    health::HealthApiDoc, menu::router::MenuApiDoc, selection::router::SelectionApiDoc,
    stats::router::StatsApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Karmic Canteen API",
        description = "Meal planning for the office canteen: employees opt in or out of upcoming meals, admins read participation, waste and inventory analytics."
    ),
    tags(
        (name = "authentication", description = "Credential sign-in"),
        (name = "menus", description = "Upcoming day menus"),
        (name = "selections", description = "Per-user meal opt-ins"),
        (name = "stats", description = "Participation, waste, inventory and feedback analytics"),
        (name = "announcements", description = "Canteen announcements"),
        (name = "health", description = "Liveness"),
    ),
    components(schemas(
        canteen_core::domain::authentication::value_objects::Identity,
        canteen_core::domain::announcement::entities::Announcement,
        canteen_core::domain::announcement::entities::Audience,
        canteen_core::domain::announcement::entities::CallToAction,
        canteen_core::domain::feedback::entities::SatisfactionFeedback,
        canteen_core::domain::inventory::entities::InventoryItem,
        canteen_core::domain::inventory::entities::RiskBand,
        canteen_core::domain::menu::entities::DayMenu,
        canteen_core::domain::menu::entities::MealItem,
        canteen_core::domain::menu::entities::MealOption,
        canteen_core::domain::menu::entities::MealType,
        canteen_core::domain::selection::entities::DailySelections,
        canteen_core::domain::selection::entities::EmployeeMealHistory,
        canteen_core::domain::selection::entities::MealSelectionRecord,
        canteen_core::domain::selection::value_objects::SelectionSnapshot,
        canteen_core::domain::selection::value_objects::SelectionSummary,
        canteen_core::domain::stats::value_objects::FeedbackSnapshot,
        canteen_core::domain::stats::value_objects::InventoryStatus,
        canteen_core::domain::stats::value_objects::OptInOverview,
        canteen_core::domain::stats::value_objects::TrendPoint,
        canteen_core::domain::stats::value_objects::WasteForecastEntry,
    ))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The full document: crate-level info plus every router's paths.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.merge(AuthenticationApiDoc::openapi());
        doc.merge(MenuApiDoc::openapi());
        doc.merge(SelectionApiDoc::openapi());
        doc.merge(StatsApiDoc::openapi());
        doc.merge(AnnouncementApiDoc::openapi());
        doc.merge(HealthApiDoc::openapi());
        doc
    }
}
