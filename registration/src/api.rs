//! HTTP client for the registration backend.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{RegistrationError, Result};
use crate::gallery::UserRecord;
use crate::model::RegistrationDraft;

pub const USERS_PATH: &str = "/api/users";
pub const REGISTRATION_PATH: &str = "/api/users/registration";
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// The two backend calls the wizard and gallery depend on.
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// POST the full aggregate. Any 2xx is success.
    async fn register(&self, draft: &RegistrationDraft, idempotency_key: &str) -> Result<()>;

    async fn list_users(&self) -> Result<Vec<UserRecord>>;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_request<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            log::error!("GET {} failed: {}", url, e);
            RegistrationError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("GET {} returned {}", url, status);
            return Err(RegistrationError::Status(status));
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", url, e);
            RegistrationError::Serialization(e)
        })?;
        Ok(parsed)
    }

    /// POST `body` as JSON; the response body is ignored.
    pub async fn post_request<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        headers: &[(&str, &str)],
    ) -> Result<()> {
        let url = self.url(path);
        log::debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("POST {} failed: {}", url, e);
            RegistrationError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("POST {} returned {}", url, status);
            return Err(RegistrationError::Status(status));
        }

        log::info!("POST {} completed with {}", url, status);
        Ok(())
    }
}

#[async_trait]
impl RegistrationBackend for ApiClient {
    async fn register(&self, draft: &RegistrationDraft, idempotency_key: &str) -> Result<()> {
        self.post_request(
            REGISTRATION_PATH,
            draft,
            &[(IDEMPOTENCY_HEADER, idempotency_key)],
        )
        .await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.get_request(USERS_PATH).await
    }
}
