pub mod repository;

pub use repository::InMemoryInventoryRepository;
