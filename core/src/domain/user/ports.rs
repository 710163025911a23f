use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, user::entities::AppUser};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Lookup by email. Implementations match case-insensitively.
    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<AppUser>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<AppUser>, CoreError>> + Send;
}
