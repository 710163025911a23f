use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    menu::entities::MealType,
    selection::{
        entities::{EmployeeMealHistory, MealSelectionRecord, SelectionState},
        value_objects::SelectionSnapshot,
    },
};

/// Storage key prefix; the full key is the prefix followed by the user id.
pub const STORAGE_KEY_PREFIX: &str = "canteen::meal-selections::";

/// Port for the per-user selection persistence collaborator. Implementations
/// must tolerate absence (first use) and treat unparseable content as
/// absence.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionStorage: Send + Sync {
    fn load(&self, user_id: &str) -> Result<Option<SelectionState>, CoreError>;

    fn save(&self, user_id: &str, state: &SelectionState) -> Result<(), CoreError>;
}

impl<S: SelectionStorage> SelectionStorage for &S {
    fn load(&self, user_id: &str) -> Result<Option<SelectionState>, CoreError> {
        (**self).load(user_id)
    }

    fn save(&self, user_id: &str, state: &SelectionState) -> Result<(), CoreError> {
        (**self).save(user_id, state)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait MealHistoryRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<EmployeeMealHistory>, CoreError>> + Send;

    /// The organisation-wide opt-in history feeding the participation
    /// trendline.
    fn aggregate(
        &self,
    ) -> impl Future<Output = Result<Vec<MealSelectionRecord>, CoreError>> + Send;
}

pub trait SelectionService: Send + Sync {
    fn selections(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<SelectionSnapshot, CoreError>> + Send;

    /// The caller's recorded meal history; `None` when nothing is recorded.
    fn meal_history(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Option<EmployeeMealHistory>, CoreError>> + Send;

    fn toggle_selection(
        &self,
        identity: Identity,
        date: NaiveDate,
        meal_type: MealType,
    ) -> impl Future<Output = Result<SelectionSnapshot, CoreError>> + Send;

    fn override_selection(
        &self,
        identity: Identity,
        date: NaiveDate,
        meal_type: MealType,
        opted_in: bool,
    ) -> impl Future<Output = Result<SelectionSnapshot, CoreError>> + Send;
}
