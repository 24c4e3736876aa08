use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::HouseError,
    house::House,
    utils::{app_data_dir, ensure_dir},
};

use super::{Result, StorageBackend};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// JSON-file persistence rooted at the app data directory or a custom root.
/// Writes go through a temporary file and a rename so a crashed save never
/// leaves a torn house file behind.
#[derive(Clone)]
pub struct JsonStorage {
    houses_dir: PathBuf,
    backups_dir: PathBuf,
    state_file: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let houses_dir = root.join("houses");
        let backups_dir = root.join("backups");
        ensure_dir(&houses_dir)?;
        ensure_dir(&backups_dir)?;
        Ok(Self {
            houses_dir,
            backups_dir,
            state_file: root.join("state.json"),
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn house_path(&self, name: &str) -> PathBuf {
        self.houses_dir
            .join(format!("{}.json", canonical_name(name)))
    }

    pub fn backup_path(&self, name: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(name).join(backup_name)
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn read_state(&self) -> Result<StoreState> {
        if self.state_file.exists() {
            let data = fs::read_to_string(&self.state_file)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(StoreState::default())
        }
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.list_backups(name)?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for entry in backups.iter().skip(self.retention) {
            let path = self.backup_path(name, entry);
            let _ = fs::remove_file(path);
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, house: &House, name: &str) -> Result<()> {
        let path = self.house_path(name);
        let json = serde_json::to_string_pretty(house)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(name, "house saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<House> {
        load_house_from_path(&self.house_path(name))
    }

    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|stem| stem.to_str()) {
                entries.push(file_name.to_string());
            }
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    fn backup(&self, house: &House, name: &str, note: Option<&str>) -> Result<()> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut file_stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            file_stem.push('_');
            file_stem.push_str(&label);
        }
        let path = dir.join(format!("{}.{}", file_stem, BACKUP_EXTENSION));
        let json = serde_json::to_string_pretty(house)?;
        write_atomic(&path, &json)?;
        self.prune_backups(name)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<House> {
        let backup_path = self.backup_path(name, backup_name);
        if !backup_path.exists() {
            return Err(HouseError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let target = self.house_path(name);
        fs::copy(&backup_path, &target)?;
        load_house_from_path(&target)
    }

    fn last_house(&self) -> Result<Option<String>> {
        let state = self.read_state()?;
        Ok(state.last_house)
    }

    fn record_last_house(&self, name: Option<&str>) -> Result<()> {
        let mut state = self.read_state()?;
        state.last_house = name.map(canonical_name);
        let data = serde_json::to_string_pretty(&state)?;
        write_atomic(&self.state_file, &data)?;
        Ok(())
    }
}

pub fn save_house_to_path(house: &House, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(house)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_house_from_path(path: &Path) -> Result<House> {
    let data = fs::read_to_string(path)?;
    let house: House = serde_json::from_str(&data)?;
    Ok(house)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    last_house: Option<String>,
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "house".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || matches!(ch, '-' | '.') {
            if !sanitized.is_empty() && !last_dash {
                sanitized.push('-');
                last_dash = true;
            }
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let stem = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let segments: Vec<&str> = stem.split('_').collect();
    segments.windows(2).find_map(|pair| {
        if !is_digits(pair[0], 8) || !is_digits(pair[1], 6) {
            return None;
        }
        let raw = format!("{}{}", pair[0], pair[1]);
        NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M%S")
            .ok()
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    })
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage =
            JsonStorage::new(Some(temp.path().to_path_buf()), Some(3)).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let house = House::new("Sampaguita House");
        storage.save(&house, "sampaguita").expect("save house");
        let loaded = storage.load("sampaguita").expect("load house");
        assert_eq!(loaded.name, "Sampaguita House");
        assert_eq!(loaded.id, house.id);
    }

    #[test]
    fn backup_writes_timestamped_files() {
        let (storage, _guard) = storage_with_temp_dir();
        let house = House::new("Backup");
        storage.save(&house, "backup").expect("save house");
        storage
            .backup(&house, "backup", Some("month end"))
            .expect("create backup");
        let backups = storage.list_backups("backup").expect("list backups");
        assert_eq!(backups.len(), 1);
        assert!(backups[0].starts_with("backup_"));
        assert!(backups[0].contains("month-end"));
    }

    #[test]
    fn restore_brings_back_the_backed_up_state() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut house = House::new("Original");
        storage.backup(&house, "main", None).expect("backup");
        let backup_name = storage.list_backups("main").unwrap().remove(0);

        house.name = "Renamed".into();
        storage.save(&house, "main").expect("save renamed");

        let restored = storage.restore("main", &backup_name).expect("restore");
        assert_eq!(restored.name, "Original");
    }

    #[test]
    fn missing_backup_is_a_storage_error() {
        let (storage, _guard) = storage_with_temp_dir();
        let err = storage
            .restore("main", "nope.json")
            .expect_err("missing backup");
        assert!(matches!(err, HouseError::Storage(_)));
    }

    #[test]
    fn last_house_state_round_trips() {
        let (storage, _guard) = storage_with_temp_dir();
        assert_eq!(storage.last_house().unwrap(), None);
        storage.record_last_house(Some("Main House")).unwrap();
        assert_eq!(storage.last_house().unwrap(), Some("main_house".into()));
        storage.record_last_house(None).unwrap();
        assert_eq!(storage.last_house().unwrap(), None);
    }
}
