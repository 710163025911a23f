use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    /// Verify a credential pair against the user registry. Every failure
    /// mode collapses into the same `InvalidCredentials` outcome so callers
    /// cannot distinguish an unknown email from a wrong password.
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
