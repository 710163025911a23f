pub mod repository;

pub use repository::InMemoryFeedbackRepository;
