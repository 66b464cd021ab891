use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{RegistrationError, Result};

pub const CONFIG_FILE: &str = "registration.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub timeout_ms: u64,
    pub redirect_delay_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// When set, drafts are kept in this JSON file instead of in memory.
    pub session_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
    pub draft: DraftConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "https://form-validation-backend-5y8x.onrender.com".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            timeout_ms: 5000,
            redirect_delay_ms: 2000,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl RegistrationConfig {
    /// Load `registration.toml` from the working directory when present, then
    /// apply environment overrides.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::load_from(path).unwrap_or_else(|e| {
                log::warn!("Could not load {}, using defaults: {}", CONFIG_FILE, e);
                RegistrationConfig::default()
            })
        } else {
            log::info!("{} not found, using defaults", CONFIG_FILE);
            RegistrationConfig::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            RegistrationError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Apply overrides from `lookup` (the process environment in [`load`]).
    ///
    /// [`load`]: RegistrationConfig::load
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup("REGISTRATION_API_BASE") {
            self.api.base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("REGISTRATION_REQUEST_TIMEOUT") {
            match secs.parse::<u64>() {
                Ok(secs) => self.api.request_timeout_secs = secs,
                Err(e) => log::warn!("Invalid REGISTRATION_REQUEST_TIMEOUT value: {}", e),
            }
        }
        if let Some(ms) = lookup("REGISTRATION_TOAST_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.notifications.timeout_ms = ms,
                Err(e) => log::warn!("Invalid REGISTRATION_TOAST_MS value: {}", e),
            }
        }
        if let Some(ms) = lookup("REGISTRATION_REDIRECT_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.notifications.redirect_delay_ms = ms,
                Err(e) => log::warn!("Invalid REGISTRATION_REDIRECT_MS value: {}", e),
            }
        }
        if let Some(path) = lookup("REGISTRATION_SESSION_FILE") {
            self.draft.session_file = (!path.is_empty()).then(|| PathBuf::from(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "[api]\nbase_url = \"http://localhost:4000\"\n\n[notifications]\ntimeout_ms = 1500\n",
        )
        .unwrap();

        let config = RegistrationConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.notifications.timeout(), Duration::from_millis(1500));
        assert_eq!(config.notifications.redirect_delay_ms, 2000);
        assert!(config.draft.session_file.is_none());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "api = [").unwrap();
        assert!(matches!(
            RegistrationConfig::load_from(file.path()),
            Err(RegistrationError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("REGISTRATION_API_BASE", "http://127.0.0.1:9000/"),
            ("REGISTRATION_REQUEST_TIMEOUT", "not-a-number"),
            ("REGISTRATION_REDIRECT_MS", "250"),
            ("REGISTRATION_SESSION_FILE", "/tmp/drafts.json"),
        ]
        .into_iter()
        .collect();

        let mut config = RegistrationConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.notifications.redirect_delay(), Duration::from_millis(250));
        assert_eq!(config.notifications.timeout_ms, 5000);
        assert_eq!(
            config.draft.session_file.as_deref(),
            Some(Path::new("/tmp/drafts.json"))
        );
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let config = RegistrationConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("base_url"));
        let parsed: RegistrationConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
