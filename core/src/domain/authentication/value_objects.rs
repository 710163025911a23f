use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    selection::entities::DailySelections,
    user::entities::{AppUser, Role},
};

/// A role-bearing authenticated identity. Everything a dashboard needs to
/// personalise itself; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub dietary_notes: Option<String>,
    pub default_opt_in: DailySelections,
}

impl From<AppUser> for Identity {
    fn from(user: AppUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
            dietary_notes: user.dietary_notes,
            default_opt_in: user.default_opt_in,
        }
    }
}
