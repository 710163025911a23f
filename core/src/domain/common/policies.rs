use crate::domain::common::entities::app_errors::CoreError;

pub fn ensure_policy(allowed: bool, message: &str) -> Result<(), CoreError> {
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden(message.to_string()))
    }
}
