use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Restock risk derived from the current level against the par level. The
/// high band uses a strict comparison: exactly 75% of par is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub current: f64,
    pub par_level: f64,
    pub vendor: Option<String>,
}

impl InventoryItem {
    pub fn risk_band(&self) -> RiskBand {
        if self.current < self.par_level * 0.75 {
            RiskBand::High
        } else if self.current < self.par_level {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    /// Percentage of par currently on hand, guarded against a zero par
    /// level.
    pub fn utilization(&self) -> u32 {
        if self.par_level == 0.0 {
            0
        } else {
            ((self.current / self.par_level) * 100.0).round() as u32
        }
    }
}
