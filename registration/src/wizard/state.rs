use std::time::Instant;

use crate::draft::DraftKey;
use crate::model::{AccountDetails, PersonalInfo, Preferences, RegistrationDraft, Slice};
use crate::notification::Notification;
use crate::schema::{FieldErrors, FormSlice, StepSchema, ACCOUNT_DETAILS, PERSONAL_INFO, PREFERENCES};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    AccountDetails,
    Preferences,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::PersonalInfo,
        WizardStep::AccountDetails,
        WizardStep::Preferences,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position in the indicator.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::PersonalInfo => 1,
            WizardStep::AccountDetails => 2,
            WizardStep::Preferences => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_index(self.index() - 1)
    }

    pub fn is_final(&self) -> bool {
        self.next().is_none()
    }

    pub fn schema(&self) -> &'static StepSchema {
        match self {
            WizardStep::PersonalInfo => &PERSONAL_INFO,
            WizardStep::AccountDetails => &ACCOUNT_DETAILS,
            WizardStep::Preferences => &PREFERENCES,
        }
    }

    /// Short label used by the step indicator.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::AccountDetails => "Account",
            WizardStep::Preferences => "Preferences",
        }
    }

    /// Validates this step's slice of a complete draft.
    pub fn validate(&self, draft: &RegistrationDraft) -> FieldErrors {
        match self {
            WizardStep::PersonalInfo => self.schema().validate(&draft.personal_info),
            WizardStep::AccountDetails => self.schema().validate(&draft.account_details),
            WizardStep::Preferences => self.schema().validate(&draft.preferences),
        }
    }

    pub fn draft_key(&self) -> DraftKey {
        match self {
            WizardStep::PersonalInfo => DraftKey::PersonalInfo,
            WizardStep::AccountDetails => DraftKey::AccountDetails,
            WizardStep::Preferences => DraftKey::Preferences,
        }
    }
}

/// Where the host should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Gallery,
}

/// Everything the UI needs to render the wizard. Read-only for the UI; all
/// changes go through [`WizardAction`](super::WizardAction).
#[derive(Debug, Clone)]
pub struct WizardState {
    pub current_step: WizardStep,

    // Working copies edited by each step's form
    pub personal_info: PersonalInfo,
    pub account_details: AccountDetails,
    pub preferences: Preferences,

    /// Errors from the last submit of the current step.
    pub field_errors: FieldErrors,

    pub is_submitting: bool,
    /// Set once the registration has been accepted; the wizard waits for the redirect.
    pub completed: bool,
    pub notification: Option<Notification>,
    pub redirect_at: Option<Instant>,
    pub navigation: Option<Route>,

    pub can_go_back: bool,
    pub progress_percentage: u8,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: WizardStep::default(),
            personal_info: PersonalInfo::default(),
            account_details: AccountDetails::default(),
            preferences: Preferences::default(),
            field_errors: FieldErrors::default(),
            is_submitting: false,
            completed: false,
            notification: None,
            redirect_at: None,
            navigation: None,
            can_go_back: false,
            progress_percentage: 0,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_progress(&mut self) {
        let done = self.current_step.index() - 1;
        self.progress_percentage = (done * 100 / (WizardStep::COUNT - 1)) as u8;
        self.can_go_back = self.current_step.previous().is_some();
    }

    /// The working copy of `step` as a named slice.
    pub fn slice(&self, step: WizardStep) -> Slice {
        match step {
            WizardStep::PersonalInfo => Slice::PersonalInfo(self.personal_info.clone()),
            WizardStep::AccountDetails => Slice::AccountDetails(self.account_details.clone()),
            WizardStep::Preferences => Slice::Preferences(self.preferences.clone()),
        }
    }

    pub fn form(&self, step: WizardStep) -> &dyn FormSlice {
        match step {
            WizardStep::PersonalInfo => &self.personal_info,
            WizardStep::AccountDetails => &self.account_details,
            WizardStep::Preferences => &self.preferences,
        }
    }

    pub fn form_mut(&mut self, step: WizardStep) -> &mut dyn FormSlice {
        match step {
            WizardStep::PersonalInfo => &mut self.personal_info,
            WizardStep::AccountDetails => &mut self.account_details,
            WizardStep::Preferences => &mut self.preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(WizardStep::PersonalInfo.previous(), None);
        assert_eq!(WizardStep::PersonalInfo.next(), Some(WizardStep::AccountDetails));
        assert_eq!(WizardStep::Preferences.next(), None);
        assert!(WizardStep::Preferences.is_final());
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(4), None);
        assert_eq!(WizardStep::default(), WizardStep::PersonalInfo);
    }

    #[test]
    fn test_validate_whole_draft() {
        let mut draft = RegistrationDraft::default();
        draft.personal_info.first_name = "Ada".into();

        let errors = WizardStep::PersonalInfo.validate(&draft);
        assert_eq!(errors.get("lastName"), Some("Last name is required"));
        assert_eq!(errors.get("firstName"), None);
        assert_eq!(WizardStep::AccountDetails.validate(&draft).len(), 2);
        assert!(WizardStep::Preferences.validate(&draft).is_empty());
    }

    #[test]
    fn test_progress_spans_indicator() {
        let mut state = WizardState::new();
        let mut seen = Vec::new();
        for step in WizardStep::ALL {
            state.current_step = step;
            state.update_progress();
            seen.push((state.progress_percentage, state.can_go_back));
        }
        assert_eq!(seen, [(0, false), (50, true), (100, true)]);
    }
}
