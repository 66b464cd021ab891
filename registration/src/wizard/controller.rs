use crate::draft::DraftRepository;
use crate::error::{RegistrationError, Result};
use crate::model::{RegistrationDraft, Slice};
use crate::notification::NotificationCenter;
use crate::submission::{SubmissionGateway, SubmissionReceipt};

use super::state::WizardStep;

/// Step index plus the merged aggregate. Performs no validation.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    step: WizardStep,
    aggregate: RegistrationDraft,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn aggregate(&self) -> &RegistrationDraft {
        &self.aggregate
    }

    /// No-op on the last step.
    pub fn advance(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// No-op on the first step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Replaces the named top-level slice wholesale.
    pub fn merge_slice(&mut self, slice: Slice) {
        match slice {
            Slice::PersonalInfo(info) => self.aggregate.personal_info = info,
            Slice::AccountDetails(details) => self.aggregate.account_details = details,
            Slice::Preferences(preferences) => self.aggregate.preferences = preferences,
        }
    }

    pub async fn submit_final(
        &self,
        gateway: &SubmissionGateway,
        idempotency_key: &str,
        drafts: &mut DraftRepository,
        notifications: &mut NotificationCenter,
    ) -> Result<SubmissionReceipt> {
        if !self.step.is_final() {
            log::warn!("Final submit requested from step {}", self.step.index());
            return Err(RegistrationError::NotOnFinalStep);
        }

        gateway
            .submit(&self.aggregate, idempotency_key, drafts, notifications)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PersonalInfo, Preferences};

    #[test]
    fn test_advance_and_retreat_clamp() {
        let mut controller = WizardController::new();
        assert_eq!(controller.retreat(), WizardStep::PersonalInfo);
        controller.advance();
        controller.advance();
        assert_eq!(controller.advance(), WizardStep::Preferences);
        assert_eq!(controller.retreat(), WizardStep::AccountDetails);
    }

    #[test]
    fn test_merge_replaces_only_named_slice() {
        let mut controller = WizardController::new();
        let info = PersonalInfo {
            first_name: "Ada".into(),
            ..Default::default()
        };
        controller.merge_slice(Slice::PersonalInfo(info.clone()));

        let preferences = Preferences {
            theme: "light".into(),
            ..Default::default()
        };
        controller.merge_slice(Slice::Preferences(preferences));

        assert_eq!(controller.aggregate().personal_info, info);
        assert_eq!(controller.aggregate().preferences.theme, "light");
        assert_eq!(controller.aggregate().account_details.account_type, "personal");
    }
}
