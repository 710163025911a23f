use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::AppUser, ports::UserRepository},
};

/// Registry of seeded users; the dashboard has no signup flow.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Vec<AppUser>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<AppUser>) -> Self {
        Self { users }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<AppUser>, CoreError> {
        Ok(self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<AppUser>, CoreError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}
