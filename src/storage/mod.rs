pub mod json_backend;

use std::path::Path;

use crate::{errors::HouseError, house::House};

pub type Result<T> = std::result::Result<T, HouseError>;

/// Abstraction over persistence backends capable of storing houses and
/// snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, house: &House, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<House>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, house: &House, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<House>;
    fn last_house(&self) -> Result<Option<String>>;
    fn record_last_house(&self, name: Option<&str>) -> Result<()>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to plain JSON files.
    fn save_to_path(&self, house: &House, path: &Path) -> Result<()> {
        json_backend::save_house_to_path(house, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<House> {
        json_backend::load_house_from_path(path)
    }
}

pub use json_backend::JsonStorage;
