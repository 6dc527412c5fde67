//! Slot storage.
//!
//! A slot is a named text value holding one serialized record list. Backends
//! only move text around; [`load_records`] and [`save_records`] do the JSON
//! work and swallow every failure so callers never see a storage error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::settings::{Settings, StorageBackend};

mod file;
mod memory;
mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Slot holding the event list.
pub const EVENTS_SLOT: &str = "calendar-events";
/// Slot holding the saved task list.
pub const TASKS_SLOT: &str = "saved-tasks";

/// Backend able to read and write named text slots.
#[cfg_attr(test, mockall::automock)]
pub trait SlotStorage {
    /// Returns `None` when the slot has never been written.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    fn write(&mut self, slot: &str, data: &str) -> Result<()>;
}

/// Read a record list from `slot`.
///
/// Missing slots, read failures and malformed JSON all yield an empty list.
/// Individual records that fail to deserialize are skipped.
pub fn load_records<T: DeserializeOwned>(storage: &dyn SlotStorage, slot: &str) -> Vec<T> {
    let raw = match storage.read(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::error!("Error loading slot '{}': {:#}", slot, err);
            return Vec::new();
        }
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(err) => {
            log::warn!("Slot '{}' does not hold a record list, treating as empty: {}", slot, err);
            return Vec::new();
        }
    };

    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping malformed record #{} in slot '{}': {}", index, slot, err);
                None
            }
        })
        .collect();

    log::debug!("Loaded {}/{} records from slot '{}'", records.len(), total, slot);
    records
}

/// Write the full record list to `slot`. Returns whether the write landed.
pub fn save_records<T: Serialize>(storage: &mut dyn SlotStorage, slot: &str, records: &[T]) -> bool {
    let data = match serde_json::to_string(records) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Error serializing slot '{}': {}", slot, err);
            return false;
        }
    };

    match storage.write(slot, &data) {
        Ok(()) => true,
        Err(err) => {
            log::error!("Error saving slot '{}': {:#}", slot, err);
            false
        }
    }
}

/// Default data directory (`~/.local/share/calendar-grid` on Linux).
pub fn default_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "CalendarGrid", "calendar-grid")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Open the backend selected in `settings`.
pub fn open_storage(settings: &Settings) -> Result<Box<dyn SlotStorage>> {
    if settings.storage == StorageBackend::Memory {
        log::info!("Using in-memory storage; nothing will be persisted");
        return Ok(Box::new(MemoryStorage::new()));
    }

    let data_dir = match &settings.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir().context("Failed to determine data directory")?,
    };
    open_in_dir(settings.storage, &data_dir)
}

fn open_in_dir(backend: StorageBackend, data_dir: &Path) -> Result<Box<dyn SlotStorage>> {
    match backend {
        StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
        StorageBackend::File => {
            log::info!("Using file storage in {}", data_dir.display());
            Ok(Box::new(FileStorage::new(data_dir)))
        }
        StorageBackend::Sqlite => {
            std::fs::create_dir_all(data_dir)
                .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
            let db_path = data_dir.join("calendar.db");
            log::info!("Using SQLite storage at {}", db_path.display());
            Ok(Box::new(SqliteStorage::open(&db_path)?))
        }
    }
}
