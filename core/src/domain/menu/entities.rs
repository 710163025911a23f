use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three meal slots served each day. The set is closed; declaration
/// order doubles as the tie-break order for preference rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snacks,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Snacks];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub name: String,
    pub calories: u32,
    pub allergens: Vec<String>,
    pub tags: Vec<String>,
    pub inventory_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealOption {
    pub meal_type: MealType,
    pub items: Vec<MealItem>,
    pub beverage_pairings: Option<Vec<String>>,
}

/// One menu per calendar day; dates are unique within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayMenu {
    pub date: NaiveDate,
    pub meals: Vec<MealOption>,
    pub guest_chef: Option<String>,
    pub sustainability_note: Option<String>,
}

impl DayMenu {
    /// Total planned inventory draw across every item of every meal.
    pub fn planned_inventory_usage(&self) -> f64 {
        self.meals
            .iter()
            .flat_map(|meal| meal.items.iter())
            .map(|item| item.inventory_usage)
            .sum()
    }
}
