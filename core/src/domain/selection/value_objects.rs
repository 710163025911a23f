use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::selection::entities::DailySelections;

/// Derived counts over a selection state: `total_opted` counts every `true`
/// flag, `upcoming_days` counts distinct days regardless of their flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionSummary {
    pub total_opted: u32,
    pub upcoming_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SelectionSnapshot {
    pub selections: BTreeMap<NaiveDate, DailySelections>,
    pub summary: SelectionSummary,
}
