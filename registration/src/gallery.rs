//! Read-only gallery of registered users.

use serde::{Deserialize, Serialize};

use crate::api::RegistrationBackend;
use crate::error::Result;
use crate::model::{AccountDetails, PersonalInfo};

pub const DEFAULT_THEME_LABEL: &str = "Default";

/// Stored preferences as the backend returns them. Unlike the wizard's
/// [`Preferences`](crate::model::Preferences), absent values stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPreferences {
    pub theme: Option<String>,
    pub notifications: Option<bool>,
}

/// One user as returned by `GET /api/users`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub personal_info: PersonalInfo,
    pub account_details: AccountDetails,
    pub preferences: StoredPreferences,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        let name = self.personal_info.full_name();
        if name.is_empty() {
            self.account_details.username.clone()
        } else {
            name
        }
    }

    pub fn occupation(&self) -> Option<&str> {
        non_empty(&self.personal_info.occupation)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.personal_info.email)
    }

    /// Off unless the record says otherwise.
    pub fn notifications_enabled(&self) -> bool {
        self.preferences.notifications.unwrap_or(false)
    }

    pub fn theme_label(&self) -> &str {
        self.preferences
            .theme
            .as_deref()
            .and_then(non_empty)
            .unwrap_or(DEFAULT_THEME_LABEL)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.trim().is_empty()).then_some(value)
}

#[derive(Debug, Clone, Default)]
pub struct UserGallery {
    pub users: Vec<UserRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UserGallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as started. Returns false if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading {
            log::warn!("Gallery load requested while already loading - ignoring");
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Applies a fetch result. On failure the previous list is kept.
    pub fn apply(&mut self, result: Result<Vec<UserRecord>>) {
        self.is_loading = false;
        match result {
            Ok(users) => {
                log::info!("Gallery loaded {} users", users.len());
                self.users = users;
            }
            Err(e) => {
                log::error!("Error fetching users: {}", e);
                self.error = Some(format!("Error fetching users: {}", e));
            }
        }
    }

    pub async fn refresh(&mut self, backend: &dyn RegistrationBackend) {
        if !self.begin_load() {
            return;
        }
        let result = backend.list_users().await;
        self.apply(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrationError;
    use crate::model::RegistrationDraft;

    #[test]
    fn test_sparse_record_parses() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id":"65f","personalInfo":{"firstName":"Ada","lastName":"Lovelace","occupation":"Employed"},"accountDetails":{}}"#,
        )
        .unwrap();

        assert_eq!(user.id, "65f");
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.occupation(), Some("Employed"));
        assert_eq!(user.email(), None);
    }

    #[test]
    fn test_missing_preferences_read_as_off_and_default() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id":"x","personalInfo":{"firstName":"Ada"},"accountDetails":{}}"#,
        )
        .unwrap();

        assert_eq!(user.preferences, StoredPreferences::default());
        assert!(!user.notifications_enabled());
        assert_eq!(user.theme_label(), "Default");
    }

    #[test]
    fn test_stored_preferences_are_shown() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id":"x","preferences":{"theme":"light","notifications":true,"language":"fr"}}"#,
        )
        .unwrap();
        assert!(user.notifications_enabled());
        assert_eq!(user.theme_label(), "light");

        let blank: UserRecord =
            serde_json::from_str(r#"{"preferences":{"theme":"","notifications":false}}"#).unwrap();
        assert!(!blank.notifications_enabled());
        assert_eq!(blank.theme_label(), "Default");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = UserRecord::default();
        user.account_details.username = "ada".into();
        assert_eq!(user.display_name(), "ada");
    }

    #[test]
    fn test_failed_load_keeps_previous_users() {
        let mut gallery = UserGallery::new();
        assert!(gallery.begin_load());
        assert!(!gallery.begin_load());
        gallery.apply(Ok(vec![UserRecord::default()]));
        assert!(!gallery.is_loading);

        assert!(gallery.begin_load());
        gallery.apply(Err(RegistrationError::Config("offline".into())));
        assert_eq!(gallery.users.len(), 1);
        assert!(gallery.error.as_deref().unwrap().contains("offline"));
    }

    struct FixedBackend(Vec<UserRecord>);

    #[async_trait::async_trait]
    impl RegistrationBackend for FixedBackend {
        async fn register(&self, _draft: &RegistrationDraft, _key: &str) -> Result<()> {
            Ok(())
        }

        async fn list_users(&self) -> Result<Vec<UserRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_refresh_replaces_users() {
        let mut record = UserRecord::default();
        record.id = "1".into();
        let backend = FixedBackend(vec![record.clone()]);

        let mut gallery = UserGallery::new();
        gallery.error = Some("stale".into());
        tokio_test::block_on(gallery.refresh(&backend));

        assert_eq!(gallery.users, vec![record]);
        assert!(gallery.error.is_none());
        assert!(!gallery.is_loading);
    }
}
