use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::SlotStorage;

/// Slot storage keeping each slot in `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        if slot.is_empty()
            || slot.contains(['/', '\\'])
            || slot.starts_with('.')
        {
            bail!("Invalid slot name '{}'", slot);
        }
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot)?;
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read slot from {}", path.display()))?;
        Ok(Some(data))
    }

    fn write(&mut self, slot: &str, data: &str) -> Result<()> {
        let path = self.slot_path(slot)?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create dir {}", self.dir.display()))?;
        fs::write(&path, data)
            .with_context(|| format!("failed to write slot to {}", path.display()))?;
        Ok(())
    }
}
