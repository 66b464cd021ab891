use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::RegistrationBackend;
use crate::draft::DraftRepository;
use crate::error::Result;
use crate::model::RegistrationDraft;
use crate::notification::{NotificationCenter, Severity};

pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting...";
pub const FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// When the wizard should hand over to the gallery.
    pub redirect_at: Instant,
}

/// Sends the final aggregate and reports the outcome.
#[derive(Clone)]
pub struct SubmissionGateway {
    backend: Arc<dyn RegistrationBackend>,
    redirect_delay: Duration,
}

impl SubmissionGateway {
    pub fn new(backend: Arc<dyn RegistrationBackend>, redirect_delay: Duration) -> Self {
        Self {
            backend,
            redirect_delay,
        }
    }

    pub fn backend(&self) -> Arc<dyn RegistrationBackend> {
        Arc::clone(&self.backend)
    }

    /// One POST of `draft`. On success every draft key is cleared; on failure
    /// the drafts are left as they were so the user can retry.
    pub async fn submit(
        &self,
        draft: &RegistrationDraft,
        idempotency_key: &str,
        drafts: &mut DraftRepository,
        notifications: &mut NotificationCenter,
    ) -> Result<SubmissionReceipt> {
        log::info!("Submitting registration (key {})", idempotency_key);

        if let Err(e) = self.backend.register(draft, idempotency_key).await {
            log::error!("Registration failed: {}", e);
            notifications.show(FAILURE_MESSAGE, Severity::Error);
            return Err(e);
        }

        if let Err(e) = drafts.clear_all() {
            log::warn!("Registration stored but drafts could not be cleared: {}", e);
        }
        notifications.show(SUCCESS_MESSAGE, Severity::Success);

        Ok(SubmissionReceipt {
            redirect_at: Instant::now() + self.redirect_delay,
        })
    }
}
