use super::backend::SlotBackend;
use crate::error::{AdBoardError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores each slot as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AdBoardError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(AdBoardError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.slot_path(key);
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(AdBoardError::Io)?;
        fs::rename(&tmp, target).map_err(AdBoardError::Io)?;

        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        self.slot_path(key).display().to_string()
    }
}
