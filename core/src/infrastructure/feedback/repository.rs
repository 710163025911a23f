use crate::domain::{
    common::entities::app_errors::CoreError,
    feedback::{entities::SatisfactionFeedback, ports::FeedbackRepository},
};

#[derive(Debug, Clone)]
pub struct InMemoryFeedbackRepository {
    entries: Vec<SatisfactionFeedback>,
}

impl InMemoryFeedbackRepository {
    pub fn new(entries: Vec<SatisfactionFeedback>) -> Self {
        Self { entries }
    }
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn list(&self) -> Result<Vec<SatisfactionFeedback>, CoreError> {
        Ok(self.entries.clone())
    }
}
