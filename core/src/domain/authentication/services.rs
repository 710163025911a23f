use crate::domain::{
    announcement::ports::AnnouncementRepository,
    authentication::{ports::AuthService, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    feedback::ports::FeedbackRepository,
    inventory::ports::InventoryRepository,
    menu::ports::MenuRepository,
    selection::ports::{MealHistoryRepository, SelectionStorage},
    user::ports::UserRepository,
};

impl<U, M, MH, I, F, A, H, S> AuthService for Service<U, M, MH, I, F, A, H, S>
where
    U: UserRepository,
    M: MenuRepository,
    MH: MealHistoryRepository,
    I: InventoryRepository,
    F: FeedbackRepository,
    A: AnnouncementRepository,
    H: HasherRepository,
    S: SelectionStorage,
{
    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, CoreError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CoreError::InvalidCredentials);
        }

        let user = self
            .user_repository
            .get_by_email(email)
            .await
            .map_err(|_| CoreError::InvalidCredentials)?
            .ok_or(CoreError::InvalidCredentials)?;

        let matches = self
            .hasher_repository
            .verify_password(password, &user.password_hash)
            .await
            .unwrap_or(false);

        if !matches {
            return Err(CoreError::InvalidCredentials);
        }

        Ok(Identity::from(user))
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        announcement::ports::MockAnnouncementRepository,
        crypto::ports::MockHasherRepository,
        feedback::ports::MockFeedbackRepository,
        inventory::ports::MockInventoryRepository,
        menu::ports::MockMenuRepository,
        selection::{
            entities::DailySelections,
            ports::{MockMealHistoryRepository, MockSelectionStorage},
        },
        user::{
            entities::{AppUser, Role},
            ports::MockUserRepository,
        },
    };

    type TestService = Service<
        MockUserRepository,
        MockMenuRepository,
        MockMealHistoryRepository,
        MockInventoryRepository,
        MockFeedbackRepository,
        MockAnnouncementRepository,
        MockHasherRepository,
        MockSelectionStorage,
    >;

    fn service_with(users: MockUserRepository, hasher: MockHasherRepository) -> TestService {
        Service::new(
            users,
            MockMenuRepository::new(),
            MockMealHistoryRepository::new(),
            MockInventoryRepository::new(),
            MockFeedbackRepository::new(),
            MockAnnouncementRepository::new(),
            hasher,
            MockSelectionStorage::new(),
        )
    }

    fn registered_user() -> AppUser {
        AppUser {
            id: "emp-anika".to_string(),
            name: "Anika Rao".to_string(),
            email: "anika.rao@karmic.solutions".to_string(),
            role: Role::Employee,
            department: "Product Design".to_string(),
            password_hash: "$argon2id$stored-hash".to_string(),
            avatar_fallback: "AR".to_string(),
            default_opt_in: DailySelections {
                breakfast: true,
                lunch: true,
                snacks: false,
            },
            dietary_notes: None,
        }
    }

    #[tokio::test]
    async fn test_valid_credentials_return_identity() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(ready(Ok(Some(registered_user())))));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(ready(Ok(true))));

        let service = service_with(users, hasher);
        let identity = service
            .authenticate("anika.rao@karmic.solutions", "correct horse")
            .await
            .unwrap();

        assert_eq!(identity.id, "emp-anika");
        assert_eq!(identity.role, Role::Employee);
        assert!(identity.default_opt_in.breakfast);
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let mut unknown_users = MockUserRepository::new();
        unknown_users
            .expect_get_by_email()
            .returning(|_| Box::pin(ready(Ok(None))));
        let unknown = service_with(unknown_users, MockHasherRepository::new())
            .authenticate("nobody@karmic.solutions", "whatever")
            .await
            .unwrap_err();

        let mut known_users = MockUserRepository::new();
        known_users
            .expect_get_by_email()
            .returning(|_| Box::pin(ready(Ok(Some(registered_user())))));
        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(ready(Ok(false))));
        let wrong_password = service_with(known_users, hasher)
            .authenticate("anika.rao@karmic.solutions", "wrong")
            .await
            .unwrap_err();

        assert_eq!(unknown, wrong_password);
        assert_eq!(unknown, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_missing_fields_fail_without_touching_the_registry() {
        let service = service_with(MockUserRepository::new(), MockHasherRepository::new());

        let err = service.authenticate("", "password").await.unwrap_err();
        assert_eq!(err, CoreError::InvalidCredentials);

        let err = service
            .authenticate("anika.rao@karmic.solutions", "")
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_hasher_failure_is_treated_as_mismatch() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(|_| Box::pin(ready(Ok(Some(registered_user())))));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(ready(Err(CoreError::HashError))));

        let err = service_with(users, hasher)
            .authenticate("anika.rao@karmic.solutions", "correct horse")
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidCredentials);
    }
}
