//! Session-scoped persistence of in-progress step data.
//!
//! A [`DraftStore`] is a plain string key-value side channel; last write wins.
//! [`DraftRepository`] layers typed JSON access on top and is what the wizard
//! is handed at construction.

mod file;
mod memory;

pub use file::FileDraftStore;
pub use memory::MemoryDraftStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Storage keys, one per wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftKey {
    PersonalInfo,
    AccountDetails,
    Preferences,
}

impl DraftKey {
    pub const ALL: [DraftKey; 3] = [
        DraftKey::PersonalInfo,
        DraftKey::AccountDetails,
        DraftKey::Preferences,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftKey::PersonalInfo => "personalInfoData",
            DraftKey::AccountDetails => "accountDetails",
            DraftKey::Preferences => "preferencesDetails",
        }
    }
}

impl std::fmt::Display for DraftKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait DraftStore: Send {
    fn read(&self, key: DraftKey) -> Option<String>;
    fn write(&mut self, key: DraftKey, value: String) -> Result<()>;
    fn remove(&mut self, key: DraftKey) -> Result<()>;
}

pub struct DraftRepository {
    store: Box<dyn DraftStore>,
}

impl DraftRepository {
    pub fn new(store: impl DraftStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn save<S: Serialize>(&mut self, key: DraftKey, value: &S) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.write(key, json)?;
        log::debug!("Draft saved: {}", key);
        Ok(())
    }

    /// Reads and parses a slice. Absent or malformed entries yield the default.
    pub fn load<S: DeserializeOwned + Default>(&self, key: DraftKey) -> S {
        let Some(raw) = self.store.read(key) else {
            return S::default();
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring malformed draft {}: {}", key, e);
                S::default()
            }
        }
    }

    pub fn contains(&self, key: DraftKey) -> bool {
        self.store.read(key).is_some()
    }

    /// Removes every wizard key.
    pub fn clear_all(&mut self) -> Result<()> {
        for key in DraftKey::ALL {
            self.store.remove(key)?;
        }
        log::info!("Draft store cleared");
        Ok(())
    }
}

impl Default for DraftRepository {
    fn default() -> Self {
        Self::new(MemoryDraftStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PersonalInfo, Preferences};

    #[test]
    fn test_typed_round_trip_through_raw_store() {
        let store = MemoryDraftStore::new();
        let mut repo = DraftRepository::new(store.clone());

        let mut info = PersonalInfo::default();
        info.first_name = "Ada".into();
        info.additional_emails.push("ada@work.io".into());
        repo.save(DraftKey::PersonalInfo, &info).unwrap();

        let raw = store.read(DraftKey::PersonalInfo).unwrap();
        assert!(raw.contains(r#""firstName":"Ada""#));
        assert_eq!(repo.load::<PersonalInfo>(DraftKey::PersonalInfo), info);
    }

    #[test]
    fn test_malformed_entry_yields_default() {
        let mut store = MemoryDraftStore::new();
        store
            .write(DraftKey::Preferences, "{not json".to_string())
            .unwrap();
        let repo = DraftRepository::new(store);

        assert_eq!(repo.load::<Preferences>(DraftKey::Preferences), Preferences::default());
        assert_eq!(repo.load::<PersonalInfo>(DraftKey::PersonalInfo), PersonalInfo::default());
    }

    #[test]
    fn test_clear_all_removes_every_key() {
        let store = MemoryDraftStore::new();
        let mut repo = DraftRepository::new(store.clone());
        for key in DraftKey::ALL {
            repo.save(key, &serde_json::json!({})).unwrap();
        }

        repo.clear_all().unwrap();
        for key in DraftKey::ALL {
            assert!(!repo.contains(key));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_key_names() {
        let names: Vec<_> = DraftKey::ALL.iter().map(DraftKey::as_str).collect();
        assert_eq!(names, ["personalInfoData", "accountDetails", "preferencesDetails"]);
    }
}
