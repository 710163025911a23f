use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::selection::entities::DailySelections;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

/// A registered canteen user. The registry is a fixed seed collection; there
/// is no signup or profile mutation in this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub password_hash: String,
    pub avatar_fallback: String,
    pub default_opt_in: DailySelections,
    pub dietary_notes: Option<String>,
}
