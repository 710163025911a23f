use std::future::Future;

use crate::domain::{
    announcement::entities::Announcement, authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AnnouncementRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Announcement>, CoreError>> + Send;
}

pub trait AnnouncementService: Send + Sync {
    /// Announcements visible to the caller's role, newest first.
    fn announcements_for(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Announcement>, CoreError>> + Send;
}
