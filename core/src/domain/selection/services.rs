use chrono::NaiveDate;

use crate::domain::{
    announcement::ports::AnnouncementRepository,
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    feedback::ports::FeedbackRepository,
    inventory::ports::InventoryRepository,
    menu::{entities::MealType, ports::MenuRepository, services::sort_menus_ascending},
    selection::{
        entities::{EmployeeMealHistory, SelectionState},
        ports::{MealHistoryRepository, SelectionService, SelectionStorage},
        store::SelectionStore,
        value_objects::SelectionSnapshot,
    },
    user::ports::UserRepository,
};

impl<U, M, MH, I, F, A, H, S> Service<U, M, MH, I, F, A, H, S>
where
    M: MenuRepository,
    S: SelectionStorage,
{
    /// Hydrate the caller's store. Defaults come from the standing meal
    /// preferences applied to every upcoming menu date.
    async fn open_selection_store(
        &self,
        identity: &Identity,
    ) -> Result<SelectionStore<&S>, CoreError> {
        let menus = sort_menus_ascending(self.menu_repository.list().await?);

        let defaults: SelectionState = menus
            .iter()
            .map(|menu| (menu.date, identity.default_opt_in))
            .collect();

        Ok(SelectionStore::initialize(
            &self.selection_storage,
            identity.id.clone(),
            Some(defaults),
        ))
    }
}

impl<U, M, MH, I, F, A, H, S> SelectionService for Service<U, M, MH, I, F, A, H, S>
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
    async fn selections(&self, identity: Identity) -> Result<SelectionSnapshot, CoreError> {
        let store = self.open_selection_store(&identity).await?;

        Ok(store.snapshot())
    }

    async fn meal_history(
        &self,
        identity: Identity,
    ) -> Result<Option<EmployeeMealHistory>, CoreError> {
        self.history_repository.get_by_user(&identity.id).await
    }

    async fn toggle_selection(
        &self,
        identity: Identity,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<SelectionSnapshot, CoreError> {
        let mut store = self.open_selection_store(&identity).await?;

        store.toggle(date, meal_type);

        Ok(store.snapshot())
    }

    async fn override_selection(
        &self,
        identity: Identity,
        date: NaiveDate,
        meal_type: MealType,
        opted_in: bool,
    ) -> Result<SelectionSnapshot, CoreError> {
        let mut store = self.open_selection_store(&identity).await?;

        store.set(date, meal_type, opted_in);

        Ok(store.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use super::*;
    use crate::domain::{
        announcement::ports::MockAnnouncementRepository,
        common::services::Service,
        crypto::ports::MockHasherRepository,
        feedback::ports::MockFeedbackRepository,
        inventory::ports::MockInventoryRepository,
        menu::{
            entities::DayMenu,
            ports::MockMenuRepository,
        },
        selection::{
            entities::DailySelections,
            ports::{MockMealHistoryRepository, MockSelectionStorage},
        },
        user::{entities::Role, ports::MockUserRepository},
    };

    fn menu(date: &str) -> DayMenu {
        DayMenu {
            date: date.parse().unwrap(),
            meals: vec![],
            guest_chef: None,
            sustainability_note: None,
        }
    }

    fn identity() -> Identity {
        Identity {
            id: "emp-anika".to_string(),
            name: "Anika Rao".to_string(),
            email: "anika.rao@karmic.solutions".to_string(),
            role: Role::Employee,
            department: "Product Design".to_string(),
            dietary_notes: None,
            default_opt_in: DailySelections {
                breakfast: true,
                lunch: false,
                snacks: true,
            },
        }
    }

    fn service_with(
        menus: MockMenuRepository,
        storage: MockSelectionStorage,
    ) -> Service<
        MockUserRepository,
        MockMenuRepository,
        MockMealHistoryRepository,
        MockInventoryRepository,
        MockFeedbackRepository,
        MockAnnouncementRepository,
        MockHasherRepository,
        MockSelectionStorage,
    > {
        Service::new(
            MockUserRepository::new(),
            menus,
            MockMealHistoryRepository::new(),
            MockInventoryRepository::new(),
            MockFeedbackRepository::new(),
            MockAnnouncementRepository::new(),
            MockHasherRepository::new(),
            storage,
        )
    }

    #[tokio::test]
    async fn test_first_use_applies_preferences_to_every_upcoming_date() {
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list()
            .returning(|| Box::pin(ready(Ok(vec![menu("2026-08-11"), menu("2026-08-10")]))));

        let mut storage = MockSelectionStorage::new();
        storage.expect_load().returning(|_| Ok(None));

        let snapshot = service_with(menus, storage)
            .selections(identity())
            .await
            .unwrap();

        assert_eq!(snapshot.summary.upcoming_days, 2);
        // breakfast and snacks are on for each of the two days
        assert_eq!(snapshot.summary.total_opted, 4);
        let daily = snapshot.selections[&"2026-08-10".parse::<NaiveDate>().unwrap()];
        assert!(daily.breakfast && !daily.lunch && daily.snacks);
    }

    #[tokio::test]
    async fn test_toggle_writes_through_and_reports_new_state() {
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list()
            .returning(|| Box::pin(ready(Ok(vec![menu("2026-08-10")]))));

        let mut storage = MockSelectionStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().times(1).returning(|_, _| Ok(()));

        let snapshot = service_with(menus, storage)
            .toggle_selection(identity(), "2026-08-10".parse().unwrap(), MealType::Lunch)
            .await
            .unwrap();

        let daily = snapshot.selections[&"2026-08-10".parse::<NaiveDate>().unwrap()];
        assert!(daily.lunch);
    }
}
