use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{
    menu::entities::MealType,
    selection::{
        entities::SelectionState,
        ports::SelectionStorage,
        value_objects::{SelectionSnapshot, SelectionSummary},
    },
};

/// Per-user opt-in state with write-through persistence.
///
/// The in-memory state is the source of truth for the lifetime of the store;
/// storage failures on either side are logged and swallowed, never
/// propagated.
#[derive(Debug)]
pub struct SelectionStore<S> {
    user_id: String,
    state: SelectionState,
    storage: S,
}

impl<S: SelectionStorage> SelectionStore<S> {
    /// Hydrate the store for a user: previously persisted state wins, then
    /// the supplied defaults, then an empty mapping.
    pub fn initialize(storage: S, user_id: impl Into<String>, defaults: Option<SelectionState>) -> Self {
        let user_id = user_id.into();

        let state = match storage.load(&user_id) {
            Ok(Some(persisted)) => persisted,
            Ok(None) => defaults.unwrap_or_default(),
            Err(err) => {
                warn!(
                    user_id = %user_id,
                    error = %err,
                    "failed to hydrate meal selections, using defaults"
                );
                defaults.unwrap_or_default()
            }
        };

        Self {
            user_id,
            state,
            storage,
        }
    }

    /// The stored flag for a (date, meal) pair; `false` for anything unseen.
    pub fn selection(&self, date: NaiveDate, meal_type: MealType) -> bool {
        self.state
            .get(&date)
            .map(|daily| daily.get(meal_type))
            .unwrap_or(false)
    }

    pub fn toggle(&mut self, date: NaiveDate, meal_type: MealType) {
        let daily = self.state.entry(date).or_default();
        let flipped = !daily.get(meal_type);
        daily.set(meal_type, flipped);
        self.persist();
    }

    pub fn set(&mut self, date: NaiveDate, meal_type: MealType, opted_in: bool) {
        self.state.entry(date).or_default().set(meal_type, opted_in);
        self.persist();
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            total_opted: self.state.values().map(|daily| daily.opted_count()).sum(),
            upcoming_days: self.state.len() as u32,
        }
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selections: self.state.clone(),
            summary: self.summary(),
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.user_id, &self.state) {
            warn!(
                user_id = %self.user_id,
                error = %err,
                "unable to persist meal selections, in-memory state remains authoritative"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError,
        selection::{entities::DailySelections, ports::MockSelectionStorage},
    };

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn writable_storage() -> MockSelectionStorage {
        let mut storage = MockSelectionStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().returning(|_, _| Ok(()));
        storage
    }

    #[test]
    fn test_unseen_pairs_default_to_false() {
        let store = SelectionStore::initialize(writable_storage(), "emp-anika", None);

        assert!(!store.selection(date("2026-08-10"), MealType::Breakfast));
        assert!(!store.selection(date("2026-08-10"), MealType::Snacks));
    }

    #[test]
    fn test_toggle_twice_restores_original_value() {
        let mut store = SelectionStore::initialize(writable_storage(), "emp-anika", None);
        let day = date("2026-08-10");

        let before = store.selection(day, MealType::Lunch);
        store.toggle(day, MealType::Lunch);
        assert_eq!(store.selection(day, MealType::Lunch), !before);
        store.toggle(day, MealType::Lunch);
        assert_eq!(store.selection(day, MealType::Lunch), before);
    }

    #[test]
    fn test_toggle_creates_day_with_all_false_defaults() {
        let mut store = SelectionStore::initialize(writable_storage(), "emp-anika", None);
        let day = date("2026-08-11");

        store.toggle(day, MealType::Snacks);

        assert!(store.selection(day, MealType::Snacks));
        assert!(!store.selection(day, MealType::Breakfast));
        assert!(!store.selection(day, MealType::Lunch));
    }

    #[test]
    fn test_persisted_state_wins_over_defaults() {
        let mut persisted = SelectionState::new();
        persisted.insert(
            date("2026-08-10"),
            DailySelections {
                breakfast: true,
                lunch: false,
                snacks: true,
            },
        );

        let mut storage = MockSelectionStorage::new();
        let stored = persisted.clone();
        storage.expect_load().return_once(move |_| Ok(Some(stored)));

        let mut defaults = SelectionState::new();
        defaults.insert(
            date("2026-08-10"),
            DailySelections {
                breakfast: false,
                lunch: true,
                snacks: false,
            },
        );

        let store = SelectionStore::initialize(storage, "emp-anika", Some(defaults));

        assert_eq!(store.state(), &persisted);
    }

    #[test]
    fn test_defaults_adopted_when_nothing_persisted() {
        let mut defaults = SelectionState::new();
        defaults.insert(
            date("2026-08-12"),
            DailySelections {
                breakfast: true,
                lunch: true,
                snacks: false,
            },
        );

        let store =
            SelectionStore::initialize(writable_storage(), "emp-jay", Some(defaults.clone()));

        assert_eq!(store.state(), &defaults);
    }

    #[test]
    fn test_unreadable_storage_falls_back_to_defaults() {
        let mut storage = MockSelectionStorage::new();
        storage
            .expect_load()
            .returning(|_| Err(CoreError::Serialization("not valid json".to_string())));

        let mut defaults = SelectionState::new();
        defaults.insert(date("2026-08-12"), DailySelections::default());

        let store = SelectionStore::initialize(storage, "emp-jay", Some(defaults.clone()));

        assert_eq!(store.state(), &defaults);
    }

    #[test]
    fn test_summary_counts_true_leaves_and_distinct_days() {
        let mut store = SelectionStore::initialize(writable_storage(), "emp-anika", None);

        store.set(date("2026-08-10"), MealType::Breakfast, true);
        store.set(date("2026-08-10"), MealType::Lunch, true);
        store.set(date("2026-08-11"), MealType::Snacks, true);
        // a day whose flags are all false still counts as scheduled
        store.set(date("2026-08-12"), MealType::Lunch, false);

        let summary = store.summary();
        assert_eq!(summary.total_opted, 3);
        assert_eq!(summary.upcoming_days, 3);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state_authoritative() {
        let mut storage = MockSelectionStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage
            .expect_save()
            .returning(|_, _| Err(CoreError::StorageUnavailable("quota exceeded".to_string())));

        let mut store = SelectionStore::initialize(storage, "emp-leena", None);
        let day = date("2026-08-10");

        store.toggle(day, MealType::Breakfast);

        assert!(store.selection(day, MealType::Breakfast));
        assert_eq!(store.summary().total_opted, 1);
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let mut storage = MockSelectionStorage::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().times(3).returning(|_, _| Ok(()));

        let mut store = SelectionStore::initialize(storage, "emp-anika", None);
        let day = date("2026-08-10");

        store.toggle(day, MealType::Breakfast);
        store.toggle(day, MealType::Breakfast);
        store.set(day, MealType::Lunch, true);
    }
}
