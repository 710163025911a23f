use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, feedback::entities::SatisfactionFeedback,
};

#[cfg_attr(test, mockall::automock)]
pub trait FeedbackRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<SatisfactionFeedback>, CoreError>> + Send;
}
