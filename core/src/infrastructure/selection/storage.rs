use std::{fs, io::ErrorKind, path::PathBuf};

use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    selection::{
        entities::SelectionState,
        ports::{STORAGE_KEY_PREFIX, SelectionStorage},
    },
};

/// Selection persistence backed by one JSON document per user under a data
/// directory. Absent files mean first use; unparseable content is treated
/// as absence.
#[derive(Debug, Clone)]
pub struct JsonFileSelectionStorage {
    dir: PathBuf,
}

impl JsonFileSelectionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();

        fs::create_dir_all(&dir)
            .map_err(|err| CoreError::StorageUnavailable(err.to_string()))?;

        Ok(Self { dir })
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY_PREFIX}{user_id}.json"))
    }
}

impl SelectionStorage for JsonFileSelectionStorage {
    fn load(&self, user_id: &str) -> Result<Option<SelectionState>, CoreError> {
        let path = self.path_for(user_id);

        let payload = match fs::read_to_string(&path) {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(CoreError::StorageUnavailable(err.to_string())),
        };

        match serde_json::from_str(&payload) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                warn!(
                    user_id = %user_id,
                    error = %err,
                    "persisted meal selections are unparseable, treating as absent"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, user_id: &str, state: &SelectionState) -> Result<(), CoreError> {
        let payload = serde_json::to_string(state)
            .map_err(|err| CoreError::Serialization(err.to_string()))?;

        fs::write(self.path_for(user_id), payload)
            .map_err(|err| CoreError::StorageUnavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{menu::entities::MealType, selection::entities::DailySelections};

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileSelectionStorage::new(dir.path()).unwrap();

        let mut state = SelectionState::new();
        let mut daily = DailySelections::default();
        daily.set(MealType::Lunch, true);
        state.insert("2026-08-10".parse().unwrap(), daily);

        storage.save("emp-anika", &state).unwrap();

        assert_eq!(storage.load("emp-anika").unwrap(), Some(state));
    }

    #[test]
    fn test_absent_file_means_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileSelectionStorage::new(dir.path()).unwrap();

        assert_eq!(storage.load("emp-jay").unwrap(), None);
    }

    #[test]
    fn test_corrupt_payload_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileSelectionStorage::new(dir.path()).unwrap();

        fs::write(storage.path_for("emp-leena"), "{not json").unwrap();

        assert_eq!(storage.load("emp-leena").unwrap(), None);
    }

    #[test]
    fn test_states_are_isolated_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileSelectionStorage::new(dir.path()).unwrap();

        let mut state = SelectionState::new();
        state.insert("2026-08-10".parse().unwrap(), DailySelections::default());
        storage.save("emp-anika", &state).unwrap();

        assert_eq!(storage.load("emp-jay").unwrap(), None);
    }
}
