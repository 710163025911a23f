use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::generate_uuid_v7,
    selection::entities::DailySelections, user::entities::Role,
};

use super::services::SESSION_TTL_SECS;

/// Claims carried by a session token. Sessions expire after 24 hours; the
/// dashboard re-authenticates afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub dietary_notes: Option<String>,
    pub default_opt_in: DailySelections,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(identity: &Identity) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            department: identity.department.clone(),
            dietary_notes: identity.dietary_notes.clone(),
            default_opt_in: identity.default_opt_in,
            jti: generate_uuid_v7(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        }
    }
}

impl From<SessionClaims> for Identity {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            department: claims.department,
            dietary_notes: claims.dietary_notes,
            default_opt_in: claims.default_opt_in,
        }
    }
}
