pub mod repository;

pub use repository::InMemoryAnnouncementRepository;
