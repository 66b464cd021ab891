//! Registration record and its three slices.
//!
//! Every struct deserializes leniently: a missing field takes its default, so
//! partial drafts and sparse gallery records both load.

use serde::{Deserialize, Serialize};

use crate::draft::DraftKey;
use crate::ordered_list::OrderedList;
use crate::schema::{FieldValue, FormSlice};

pub const OCCUPATION_EMPLOYED: &str = "Employed";
pub const THEME_SYSTEM: &str = "system";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyDetails {
    pub company_name: String,
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub additional_emails: OrderedList<String>,
    pub occupation: String,
    pub company_details: CompanyDetails,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPart {
    Question,
    Answer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountPreferences {
    pub notifications: bool,
    pub two_factor_auth: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDetails {
    pub username: String,
    pub password: String,
    pub account_type: String,
    pub security_questions: OrderedList<SecurityQuestion>,
    pub preferences: AccountPreferences,
}

impl AccountDetails {
    pub const MAX_SECURITY_QUESTIONS: usize = 3;
}

impl Default for AccountDetails {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            account_type: "personal".to_string(),
            security_questions: OrderedList::new(),
            preferences: AccountPreferences::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: String,
    pub notifications: bool,
    pub language: String,
    pub accessibility: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            notifications: true,
            language: "en".to_string(),
            accessibility: false,
        }
    }
}

/// The aggregate sent in the final submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub personal_info: PersonalInfo,
    pub account_details: AccountDetails,
    pub preferences: Preferences,
}

/// One named slice of the aggregate, as produced by a completed step.
#[derive(Debug, Clone, PartialEq)]
pub enum Slice {
    PersonalInfo(PersonalInfo),
    AccountDetails(AccountDetails),
    Preferences(Preferences),
}

impl Slice {
    pub fn key(&self) -> DraftKey {
        match self {
            Slice::PersonalInfo(_) => DraftKey::PersonalInfo,
            Slice::AccountDetails(_) => DraftKey::AccountDetails,
            Slice::Preferences(_) => DraftKey::Preferences,
        }
    }
}

fn text(value: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(value.to_string()))
}

fn assign_text(slot: &mut String, value: FieldValue) -> bool {
    match value {
        FieldValue::Text(v) => {
            *slot = v;
            true
        }
        FieldValue::Flag(_) => false,
    }
}

fn assign_flag(slot: &mut bool, value: FieldValue) -> bool {
    match value {
        FieldValue::Flag(v) => {
            *slot = v;
            true
        }
        FieldValue::Text(_) => false,
    }
}

impl FormSlice for PersonalInfo {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "firstName" => text(&self.first_name),
            "lastName" => text(&self.last_name),
            "email" => text(&self.email),
            "occupation" => text(&self.occupation),
            "companyDetails.companyName" => text(&self.company_details.company_name),
            "companyDetails.position" => text(&self.company_details.position),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match name {
            "firstName" => assign_text(&mut self.first_name, value),
            "lastName" => assign_text(&mut self.last_name, value),
            "email" => assign_text(&mut self.email, value),
            "occupation" => assign_text(&mut self.occupation, value),
            "companyDetails.companyName" => {
                assign_text(&mut self.company_details.company_name, value)
            }
            "companyDetails.position" => assign_text(&mut self.company_details.position, value),
            _ => false,
        }
    }
}

impl FormSlice for AccountDetails {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "username" => text(&self.username),
            "password" => text(&self.password),
            "accountType" => text(&self.account_type),
            "preferences.notifications" => Some(FieldValue::Flag(self.preferences.notifications)),
            "preferences.twoFactorAuth" => Some(FieldValue::Flag(self.preferences.two_factor_auth)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match name {
            "username" => assign_text(&mut self.username, value),
            "password" => assign_text(&mut self.password, value),
            "accountType" => assign_text(&mut self.account_type, value),
            "preferences.notifications" => assign_flag(&mut self.preferences.notifications, value),
            "preferences.twoFactorAuth" => {
                assign_flag(&mut self.preferences.two_factor_auth, value)
            }
            _ => false,
        }
    }
}

impl FormSlice for Preferences {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "theme" => text(&self.theme),
            "language" => text(&self.language),
            "notifications" => Some(FieldValue::Flag(self.notifications)),
            "accessibility" => Some(FieldValue::Flag(self.accessibility)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        match name {
            "theme" => assign_text(&mut self.theme, value),
            "language" => assign_text(&mut self.language, value),
            "notifications" => assign_flag(&mut self.notifications, value),
            "accessibility" => assign_flag(&mut self.accessibility, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_form() {
        let draft = RegistrationDraft::default();
        assert_eq!(draft.preferences.theme, "dark");
        assert!(draft.preferences.notifications);
        assert_eq!(draft.preferences.language, "en");
        assert_eq!(draft.account_details.account_type, "personal");
        assert!(draft.personal_info.additional_emails.is_empty());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let mut draft = RegistrationDraft::default();
        draft.personal_info.first_name = "Ada".to_string();
        draft.account_details.preferences.two_factor_auth = true;

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["personalInfo"]["firstName"], "Ada");
        assert_eq!(json["personalInfo"]["additionalEmails"], serde_json::json!([]));
        assert_eq!(json["accountDetails"]["preferences"]["twoFactorAuth"], true);
        assert_eq!(json["preferences"]["theme"], "dark");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let info: PersonalInfo =
            serde_json::from_str(r#"{"firstName":"Ada","additionalEmails":["a@b.co"]}"#).unwrap();
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.additional_emails.len(), 1);
        assert_eq!(info.company_details, CompanyDetails::default());

        let prefs: Preferences = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(prefs.theme, "light");
        assert!(prefs.notifications);
    }

    #[test]
    fn test_field_access_rejects_kind_mismatch() {
        let mut prefs = Preferences::default();
        assert!(!prefs.set_field("notifications", FieldValue::Text("yes".into())));
        assert!(prefs.set_field("notifications", FieldValue::Flag(false)));
        assert_eq!(prefs.field("notifications"), Some(FieldValue::Flag(false)));
        assert!(!prefs.set_field("unknown", FieldValue::Flag(true)));
    }

    #[test]
    fn test_nested_company_fields() {
        let mut info = PersonalInfo::default();
        assert!(info.set_field(
            "companyDetails.companyName",
            FieldValue::Text("Analytical Engines".into())
        ));
        assert_eq!(info.company_details.company_name, "Analytical Engines");
        assert_eq!(info.full_name(), "");
    }
}
