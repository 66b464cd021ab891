use crate::model::QuestionPart;
use crate::schema::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    // Field edits on the current step
    SetField { field: String, value: FieldValue },

    // Additional emails (personal info)
    AddAdditionalEmail,
    UpdateAdditionalEmail { index: usize, value: String },
    RemoveAdditionalEmail { index: usize },

    // Security questions (account details)
    AddSecurityQuestion,
    UpdateSecurityQuestion { index: usize, part: QuestionPart, value: String },
    RemoveSecurityQuestion { index: usize },

    // Navigation
    SubmitStep,
    GoBack,

    DismissNotification,
    Reset,
}

impl WizardAction {
    pub fn set_text(field: &str, value: impl Into<String>) -> Self {
        WizardAction::SetField {
            field: field.to_string(),
            value: FieldValue::Text(value.into()),
        }
    }

    pub fn set_flag(field: &str, value: bool) -> Self {
        WizardAction::SetField {
            field: field.to_string(),
            value: FieldValue::Flag(value),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardAction::SetField { .. } => "Updating field",
            WizardAction::AddAdditionalEmail => "Adding additional email",
            WizardAction::UpdateAdditionalEmail { .. } => "Updating additional email",
            WizardAction::RemoveAdditionalEmail { .. } => "Removing additional email",
            WizardAction::AddSecurityQuestion => "Adding security question",
            WizardAction::UpdateSecurityQuestion { .. } => "Updating security question",
            WizardAction::RemoveSecurityQuestion { .. } => "Removing security question",
            WizardAction::SubmitStep => "Submitting current step",
            WizardAction::GoBack => "Going back to previous step",
            WizardAction::DismissNotification => "Dismissing notification",
            WizardAction::Reset => "Resetting wizard",
        }
    }
}
