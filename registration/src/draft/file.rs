use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DraftKey, DraftStore};
use crate::error::Result;

/// Draft store backed by one JSON object file (`{"personalInfoData": "...", ...}`).
///
/// The whole file is rewritten on every change. A missing, unreadable or
/// malformed file reads as empty.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return BTreeMap::new(),
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed session file {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn read(&self, key: DraftKey) -> Option<String> {
        self.load().remove(key.as_str())
    }

    fn write(&mut self, key: DraftKey, value: String) -> Result<()> {
        let mut entries = self.load();
        entries.insert(key.as_str().to_string(), value);
        self.persist(&entries)
    }

    fn remove(&mut self, key: DraftKey) -> Result<()> {
        let mut entries = self.load();
        if entries.remove(key.as_str()).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
