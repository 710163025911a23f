use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SatisfactionFeedback {
    pub id: String,
    pub user_id: String,
    /// 1 to 5.
    pub rating: u8,
    pub occurred_on: NaiveDate,
    pub highlight: String,
    pub improvement: Option<String>,
}
