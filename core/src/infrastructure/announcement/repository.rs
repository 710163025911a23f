use crate::domain::{
    announcement::{entities::Announcement, ports::AnnouncementRepository},
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone)]
pub struct InMemoryAnnouncementRepository {
    announcements: Vec<Announcement>,
}

impl InMemoryAnnouncementRepository {
    pub fn new(announcements: Vec<Announcement>) -> Self {
        Self { announcements }
    }
}

impl AnnouncementRepository for InMemoryAnnouncementRepository {
    async fn list(&self) -> Result<Vec<Announcement>, CoreError> {
        Ok(self.announcements.clone())
    }
}
