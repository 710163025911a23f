use crate::{
    domain::common::{CanteenConfig, services::Service},
    infrastructure::{
        announcement::InMemoryAnnouncementRepository,
        crypto::Argon2HasherRepository,
        feedback::InMemoryFeedbackRepository,
        inventory::InMemoryInventoryRepository,
        menu::InMemoryMenuRepository,
        seed,
        selection::{InMemoryMealHistoryRepository, JsonFileSelectionStorage},
        user::InMemoryUserRepository,
    },
};

pub type CanteenService = Service<
    InMemoryUserRepository,
    InMemoryMenuRepository,
    InMemoryMealHistoryRepository,
    InMemoryInventoryRepository,
    InMemoryFeedbackRepository,
    InMemoryAnnouncementRepository,
    Argon2HasherRepository,
    JsonFileSelectionStorage,
>;

/// Wire the seeded repositories together into the service the API runs on.
pub async fn create_service(config: CanteenConfig) -> Result<CanteenService, anyhow::Error> {
    let hasher = Argon2HasherRepository::new();
    let users = seed::users(&hasher).await?;
    let selection_storage = JsonFileSelectionStorage::new(config.selections.data_dir)?;

    Ok(Service::new(
        InMemoryUserRepository::new(users),
        InMemoryMenuRepository::new(seed::menus()),
        InMemoryMealHistoryRepository::new(seed::employee_histories(), seed::aggregate_history()),
        InMemoryInventoryRepository::new(seed::inventory()),
        InMemoryFeedbackRepository::new(seed::feedback_entries()),
        InMemoryAnnouncementRepository::new(seed::announcements()),
        hasher,
        selection_storage,
    ))
}
