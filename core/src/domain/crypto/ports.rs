use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for password hashing. The comparison is deliberately slow and
/// timing-resistant; callers treat a failed verification the same as a
/// mismatch.
#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn verify_password(
        &self,
        password: &str,
        hash: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
