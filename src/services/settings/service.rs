use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::models::settings::Settings;

/// Loads and stores [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Service for the platform config file (`~/.config/calendar-grid/config.toml` on Linux).
    pub fn default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "CalendarGrid", "calendar-grid")
            .context("Failed to determine config directory")?;
        Ok(Self::new(dirs.config_dir().join("config.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write config {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{DropPolicy, StorageBackend};
    use crate::models::ui::ViewType;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("config.toml"));
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_update_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("conf").join("config.toml"));

        let settings = Settings {
            storage: StorageBackend::Sqlite,
            default_view: ViewType::Month,
            drop_policy: DropPolicy::PreserveDuration,
            data_dir: Some(dir.path().join("data")),
            ..Default::default()
        };
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), settings);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_visible_per_day = 0").unwrap();
        assert!(SettingsService::new(&path).get().is_err());

        fs::write(&path, "storage = [").unwrap();
        assert!(SettingsService::new(&path).get().is_err());
    }
}
