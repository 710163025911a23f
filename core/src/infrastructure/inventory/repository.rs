use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::{entities::InventoryItem, ports::InventoryRepository},
};

#[derive(Debug, Clone)]
pub struct InMemoryInventoryRepository {
    items: Vec<InventoryItem>,
}

impl InMemoryInventoryRepository {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    async fn list(&self) -> Result<Vec<InventoryItem>, CoreError> {
        Ok(self.items.clone())
    }
}
