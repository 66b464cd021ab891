use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{DraftKey, DraftStore};
use crate::error::Result;

/// In-memory session store. Clones share the same entries, so a wizard that is
/// torn down and mounted again over a clone sees what the previous one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    entries: Arc<Mutex<HashMap<DraftKey, String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<DraftKey, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DraftStore for MemoryDraftStore {
    fn read(&self, key: DraftKey) -> Option<String> {
        self.entries().get(&key).cloned()
    }

    fn write(&mut self, key: DraftKey, value: String) -> Result<()> {
        self.entries().insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: DraftKey) -> Result<()> {
        self.entries().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let mut first = MemoryDraftStore::new();
        let second = first.clone();

        first
            .write(DraftKey::AccountDetails, r#"{"username":"ada"}"#.to_string())
            .unwrap();
        assert_eq!(
            second.read(DraftKey::AccountDetails).as_deref(),
            Some(r#"{"username":"ada"}"#)
        );

        first.remove(DraftKey::AccountDetails).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryDraftStore::new();
        store.write(DraftKey::Preferences, "1".into()).unwrap();
        store.write(DraftKey::Preferences, "2".into()).unwrap();
        assert_eq!(store.read(DraftKey::Preferences).as_deref(), Some("2"));
    }
}
