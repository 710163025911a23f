pub mod repository;

pub use repository::InMemoryMenuRepository;
