use crate::errors::HouseError;
use crate::house::{House, CURRENT_SCHEMA_VERSION};
use crate::storage::StorageBackend;

use std::path::Path;

/// Facade that coordinates house state, persistence, and backups.
pub struct HouseManager {
    pub current: Option<House>,
    current_name: Option<String>,
    storage: Box<dyn StorageBackend>,
}

impl HouseManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            current: None,
            current_name: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn load(&mut self, name: &str) -> Result<(), HouseError> {
        let house = self.storage.load(name)?;
        Self::ensure_schema_support(house.schema_version)?;
        self.current = Some(house);
        self.current_name = Some(name.to_string());
        Ok(())
    }

    pub fn load_from_path(&mut self, path: &Path) -> Result<(), HouseError> {
        let house = self.storage.load_from_path(path)?;
        Self::ensure_schema_support(house.schema_version)?;
        self.current = Some(house);
        self.current_name = None;
        Ok(())
    }

    pub fn save(&mut self) -> Result<(), HouseError> {
        let name = self
            .current_name
            .clone()
            .ok_or_else(|| HouseError::Storage("current house is unnamed".into()))?;
        let snapshot = self
            .current
            .clone()
            .ok_or_else(|| HouseError::Storage("no house loaded".into()))?;
        self.storage.save(&snapshot, &name)
    }

    pub fn save_as(&mut self, name: &str) -> Result<(), HouseError> {
        let snapshot = self
            .current
            .clone()
            .ok_or_else(|| HouseError::Storage("no house loaded".into()))?;
        self.storage.save(&snapshot, name)?;
        self.current_name = Some(name.to_string());
        Ok(())
    }

    pub fn save_to_path(&mut self, path: &Path) -> Result<(), HouseError> {
        let snapshot = self
            .current
            .clone()
            .ok_or_else(|| HouseError::Storage("no house loaded".into()))?;
        self.storage.save_to_path(&snapshot, path)
    }

    pub fn backup(&self, note: Option<&str>) -> Result<(), HouseError> {
        let name = self
            .current_name
            .as_deref()
            .ok_or_else(|| HouseError::Storage("current house is unnamed".into()))?;
        let house = self
            .current
            .as_ref()
            .ok_or_else(|| HouseError::Storage("no house loaded".into()))?;
        self.storage.backup(house, name, note)
    }

    pub fn list_backups(&self, name: &str) -> Result<Vec<String>, HouseError> {
        self.storage.list_backups(name)
    }

    pub fn restore_backup(&mut self, name: &str, backup_name: &str) -> Result<(), HouseError> {
        let house = self.storage.restore(name, backup_name)?;
        Self::ensure_schema_support(house.schema_version)?;
        self.current = Some(house);
        self.current_name = Some(name.to_string());
        Ok(())
    }

    pub fn last_opened(&self) -> Result<Option<String>, HouseError> {
        self.storage.last_house()
    }

    pub fn record_last_opened(&self, name: Option<&str>) -> Result<(), HouseError> {
        self.storage.record_last_house(name)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn set_current(&mut self, house: House, name: Option<String>) {
        self.current = Some(house);
        self.current_name = name;
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.current_name = None;
    }

    fn ensure_schema_support(schema_version: u8) -> Result<(), HouseError> {
        if schema_version > CURRENT_SCHEMA_VERSION {
            return Err(HouseError::Storage(format!(
                "house schema v{} is newer than supported v{}",
                schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use std::fs;
    use tempfile::tempdir;

    fn manager_with_temp_dir() -> (HouseManager, tempfile::TempDir) {
        let temp = tempdir().unwrap();
        let storage = JsonStorage::new(Some(temp.path().to_path_buf()), Some(3)).unwrap();
        (HouseManager::new(Box::new(storage)), temp)
    }

    #[test]
    fn save_and_load_named_roundtrip() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.set_current(House::new("Demo House"), None);
        manager.save_as("demo-house").expect("save house");

        manager.clear();
        manager.load("demo-house").expect("load house");
        assert_eq!(manager.current_name(), Some("demo-house"));
        assert_eq!(manager.current.as_ref().map(|h| h.name.as_str()), Some("Demo House"));
    }

    #[test]
    fn save_without_a_house_fails() {
        let (mut manager, _guard) = manager_with_temp_dir();
        let err = manager.save_as("empty").expect_err("nothing to save");
        assert!(matches!(err, HouseError::Storage(_)));
    }

    #[test]
    fn backup_and_restore_roundtrip() {
        let (mut manager, _guard) = manager_with_temp_dir();
        manager.set_current(House::new("Original"), None);
        manager.save_as("main").unwrap();
        manager.backup(Some("before rename")).expect("backup");

        if let Some(house) = manager.current.as_mut() {
            house.name = "Renamed".into();
        }
        manager.save().unwrap();

        let backups = manager.list_backups("main").expect("list backups");
        manager
            .restore_backup("main", &backups[0])
            .expect("restore backup");
        assert_eq!(
            manager.current.as_ref().map(|h| h.name.as_str()),
            Some("Original")
        );
    }

    #[test]
    fn rejects_future_schema_versions() {
        let (mut manager, guard) = manager_with_temp_dir();
        let path = guard.path().join("future.json");
        let mut house = House::new("Future");
        house.schema_version = CURRENT_SCHEMA_VERSION + 5;
        fs::write(&path, serde_json::to_string(&house).unwrap()).unwrap();

        let err = manager
            .load_from_path(&path)
            .expect_err("load future schema should fail");
        match err {
            HouseError::Storage(message) => {
                assert!(message.contains("newer"), "unexpected error: {message}");
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn last_opened_round_trips_through_state() {
        let (manager, _guard) = manager_with_temp_dir();
        assert_eq!(manager.last_opened().unwrap(), None);
        manager.record_last_opened(Some("main")).unwrap();
        assert_eq!(manager.last_opened().unwrap(), Some("main".into()));
    }
}
