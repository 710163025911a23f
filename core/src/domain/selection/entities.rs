use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::MealType;

/// Opt-in flags for the three meal slots of a single day. A missing flag is
/// never "unknown"; everything defaults to not opted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailySelections {
    pub breakfast: bool,
    pub lunch: bool,
    pub snacks: bool,
}

impl DailySelections {
    pub fn get(&self, meal_type: MealType) -> bool {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Snacks => self.snacks,
        }
    }

    pub fn set(&mut self, meal_type: MealType, value: bool) {
        match meal_type {
            MealType::Breakfast => self.breakfast = value,
            MealType::Lunch => self.lunch = value,
            MealType::Snacks => self.snacks = value,
        }
    }

    pub fn opted_count(&self) -> u32 {
        [self.breakfast, self.lunch, self.snacks]
            .into_iter()
            .filter(|opted| *opted)
            .count() as u32
    }
}

/// Per-user opt-in state, keyed by calendar day. Scoped to a single user;
/// no cross-user visibility.
pub type SelectionState = BTreeMap<NaiveDate, DailySelections>;

/// A historical, immutable fact: on this day, for this meal, the employee
/// was (or was not) opted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSelectionRecord {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub opted_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeMealHistory {
    pub user_id: String,
    pub records: Vec<MealSelectionRecord>,
}
