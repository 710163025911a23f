use crate::domain::{
    announcement::{
        entities::Announcement,
        ports::{AnnouncementRepository, AnnouncementService},
    },
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    feedback::ports::FeedbackRepository,
    inventory::ports::InventoryRepository,
    menu::ports::MenuRepository,
    selection::ports::{MealHistoryRepository, SelectionStorage},
    user::{entities::Role, ports::UserRepository},
};

pub fn visible_announcements(announcements: Vec<Announcement>, role: Role) -> Vec<Announcement> {
    let mut visible: Vec<Announcement> = announcements
        .into_iter()
        .filter(|announcement| announcement.audience.includes(role))
        .collect();

    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

impl<U, M, MH, I, F, A, H, S> AnnouncementService for Service<U, M, MH, I, F, A, H, S>
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
    async fn announcements_for(&self, identity: Identity) -> Result<Vec<Announcement>, CoreError> {
        let announcements = self.announcement_repository.list().await?;

        Ok(visible_announcements(announcements, identity.role))
    }
}
