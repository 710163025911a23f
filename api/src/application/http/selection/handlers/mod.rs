pub mod get_meal_history;
pub mod get_selection_summary;
pub mod get_selections;
pub mod override_selection;
pub mod toggle_selection;
