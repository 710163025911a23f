pub mod get_menu_by_date;
pub mod get_menus;
pub mod get_next_menu;
