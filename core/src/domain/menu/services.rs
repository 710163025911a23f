use chrono::{NaiveDate, Utc};

use crate::domain::{
    announcement::ports::AnnouncementRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    feedback::ports::FeedbackRepository,
    inventory::ports::InventoryRepository,
    menu::{
        entities::DayMenu,
        ports::{MenuRepository, MenuService},
    },
    selection::ports::{MealHistoryRepository, SelectionStorage},
    user::ports::UserRepository,
};

pub fn sort_menus_ascending(mut menus: Vec<DayMenu>) -> Vec<DayMenu> {
    menus.sort_by_key(|menu| menu.date);
    menus
}

pub fn next_menu_on_or_after(menus: &[DayMenu], today: NaiveDate) -> Option<DayMenu> {
    let sorted = sort_menus_ascending(menus.to_vec());
    sorted.into_iter().find(|menu| menu.date >= today)
}

impl<U, M, MH, I, F, A, H, S> MenuService for Service<U, M, MH, I, F, A, H, S>
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
    async fn upcoming_menus(&self, limit: Option<usize>) -> Result<Vec<DayMenu>, CoreError> {
        let mut menus = sort_menus_ascending(self.menu_repository.list().await?);

        if let Some(limit) = limit {
            menus.truncate(limit);
        }

        Ok(menus)
    }

    async fn menu_by_date(&self, date: NaiveDate) -> Result<Option<DayMenu>, CoreError> {
        let menus = self.menu_repository.list().await?;

        Ok(menus.into_iter().find(|menu| menu.date == date))
    }

    async fn next_menu(&self) -> Result<Option<DayMenu>, CoreError> {
        let menus = self.menu_repository.list().await?;

        Ok(next_menu_on_or_after(&menus, Utc::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(date: &str) -> DayMenu {
        DayMenu {
            date: date.parse().unwrap(),
            meals: vec![],
            guest_chef: None,
            sustainability_note: None,
        }
    }

    #[test]
    fn test_sort_menus_ascending() {
        let menus = vec![menu("2026-08-12"), menu("2026-08-10"), menu("2026-08-11")];
        let sorted = sort_menus_ascending(menus);
        let dates: Vec<String> = sorted.iter().map(|m| m.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-08-10", "2026-08-11", "2026-08-12"]);
    }

    #[test]
    fn test_next_menu_skips_past_days() {
        let menus = vec![menu("2026-08-05"), menu("2026-08-09"), menu("2026-08-10")];
        let next = next_menu_on_or_after(&menus, "2026-08-07".parse().unwrap());
        assert_eq!(next.unwrap().date.to_string(), "2026-08-09");
    }

    #[test]
    fn test_next_menu_accepts_today() {
        let menus = vec![menu("2026-08-07")];
        let next = next_menu_on_or_after(&menus, "2026-08-07".parse().unwrap());
        assert!(next.is_some());
    }

    #[test]
    fn test_next_menu_none_when_all_past() {
        let menus = vec![menu("2026-08-01")];
        assert!(next_menu_on_or_after(&menus, "2026-08-07".parse().unwrap()).is_none());
    }
}
