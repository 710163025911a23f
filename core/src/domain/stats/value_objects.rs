use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    feedback::entities::SatisfactionFeedback,
    inventory::entities::{InventoryItem, RiskBand},
    menu::entities::MealType,
};

/// One point of the participation trendline: the share of history records
/// for a day that were opt-ins, as a percentage rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub opt_in_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OptInOverview {
    /// Number of history records inside the sampling window.
    pub recorded_meals: u32,
    /// Meal types with at least one opt-in, most frequent first.
    pub preferred_meals: Vec<MealType>,
    /// Opted share of the window, 0.0 to 1.0.
    pub participation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryStatus {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub risk: RiskBand,
    pub utilization: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WasteForecastEntry {
    pub date: NaiveDate,
    pub predicted_opt_ins: i64,
    pub waste_avoided_kg: f64,
    pub carbon_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackSnapshot {
    /// Average rating of the entries below, rounded to one decimal; 0 when
    /// there are none.
    pub average: f64,
    pub entries: Vec<SatisfactionFeedback>,
}
