// Settings module
// Application configuration, read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::ui::{HourWindow, ViewType};

/// Where the event and task slots are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Nothing survives the process.
    Memory,
    /// One JSON file per slot in `data_dir`.
    #[default]
    File,
    /// A `slots` table in `data_dir/calendar.db`.
    Sqlite,
}

/// How a drop on an hour cell sets the event's end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPolicy {
    /// End is always start + 1h; the old duration is discarded.
    #[default]
    OneHour,
    /// End keeps the event's original length.
    PreserveDuration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageBackend,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub default_view: ViewType,
    pub week_hours: HourWindow,
    pub drop_policy: DropPolicy,
    /// Events listed per month cell before the "+N more" line.
    pub max_visible_per_day: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageBackend::File,
            data_dir: None,
            default_view: ViewType::Week,
            week_hours: HourWindow::Business,
            drop_policy: DropPolicy::OneHour,
            max_visible_per_day: 3,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_visible_per_day == 0 {
            return Err("max_visible_per_day must be at least 1".to_string());
        }

        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err("data_dir cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_visible_per_day, 3);
        assert_eq!(settings.drop_policy, DropPolicy::OneHour);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            storage = "sqlite"
            week_hours = "full_day"
            drop_policy = "preserve_duration"
            "#,
        )
        .unwrap();
        assert_eq!(settings.storage, StorageBackend::Sqlite);
        assert_eq!(settings.week_hours, HourWindow::FullDay);
        assert_eq!(settings.drop_policy, DropPolicy::PreserveDuration);
        assert_eq!(settings.default_view, ViewType::Week);
    }

    #[test]
    fn test_zero_visible_rejected() {
        let settings = Settings {
            max_visible_per_day: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
