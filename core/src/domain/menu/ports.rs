use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{common::entities::app_errors::CoreError, menu::entities::DayMenu};

#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<DayMenu>, CoreError>> + Send;
}

pub trait MenuService: Send + Sync {
    /// Menus sorted ascending by date, optionally truncated.
    fn upcoming_menus(
        &self,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<DayMenu>, CoreError>> + Send;

    /// The menu for an exact calendar day, if one is planned.
    fn menu_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<DayMenu>, CoreError>> + Send;

    /// The first menu on or after today.
    fn next_menu(&self) -> impl Future<Output = Result<Option<DayMenu>, CoreError>> + Send;
}
