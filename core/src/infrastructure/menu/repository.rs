use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::DayMenu, ports::MenuRepository},
};

#[derive(Debug, Clone)]
pub struct InMemoryMenuRepository {
    menus: Vec<DayMenu>,
}

impl InMemoryMenuRepository {
    pub fn new(menus: Vec<DayMenu>) -> Self {
        Self { menus }
    }
}

impl MenuRepository for InMemoryMenuRepository {
    async fn list(&self) -> Result<Vec<DayMenu>, CoreError> {
        Ok(self.menus.clone())
    }
}
