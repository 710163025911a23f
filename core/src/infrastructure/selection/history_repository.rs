use crate::domain::{
    common::entities::app_errors::CoreError,
    selection::{
        entities::{EmployeeMealHistory, MealSelectionRecord},
        ports::MealHistoryRepository,
    },
};

#[derive(Debug, Clone)]
pub struct InMemoryMealHistoryRepository {
    histories: Vec<EmployeeMealHistory>,
    aggregate: Vec<MealSelectionRecord>,
}

impl InMemoryMealHistoryRepository {
    pub fn new(
        histories: Vec<EmployeeMealHistory>,
        aggregate: Vec<MealSelectionRecord>,
    ) -> Self {
        Self {
            histories,
            aggregate,
        }
    }
}

impl MealHistoryRepository for InMemoryMealHistoryRepository {
    async fn get_by_user(&self, user_id: &str) -> Result<Option<EmployeeMealHistory>, CoreError> {
        Ok(self
            .histories
            .iter()
            .find(|history| history.user_id == user_id)
            .cloned())
    }

    async fn aggregate(&self) -> Result<Vec<MealSelectionRecord>, CoreError> {
        Ok(self.aggregate.clone())
    }
}
