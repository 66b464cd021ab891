//! Static field schema for the wizard steps.
//!
//! Each step declares its inputs once, as a table of [`FieldSpec`]s. The same
//! table drives validation here and the generic renderer in the desktop UI.

mod rules;
mod tables;

pub use rules::{email_regex, is_strong_password, Rule, EMAIL_PATTERN};
pub use tables::{
    ACCOUNT_DETAILS, ACCOUNT_TYPE_OPTIONS, LANGUAGE_OPTIONS, OCCUPATION_OPTIONS, PERSONAL_INFO,
    PREFERENCES, SECURITY_QUESTION_OPTIONS, THEME_OPTIONS,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            FieldValue::Flag(_) => None,
        }
    }
}

/// Name-addressed access to a slice's scalar fields. Names are the wire paths
/// used in the schema tables (`"companyDetails.position"`).
pub trait FormSlice {
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Returns false for unknown names or a value of the wrong kind.
    fn set_field(&mut self, name: &str, value: FieldValue) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Select(&'static [SelectOption]),
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Text(&'static str),
    Flag(bool),
}

/// Presentation gate: the field is shown only while `field` holds `equals`.
#[derive(Debug, Clone, Copy)]
pub struct Visibility {
    pub field: &'static str,
    pub equals: Expect,
}

impl Visibility {
    pub fn holds<S: FormSlice + ?Sized>(&self, slice: &S) -> bool {
        match (slice.field(self.field), self.equals) {
            (Some(FieldValue::Text(actual)), Expect::Text(expected)) => actual == expected,
            (Some(FieldValue::Flag(actual)), Expect::Flag(expected)) => actual == expected,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
    pub visible_when: Option<Visibility>,
}

impl FieldSpec {
    pub fn is_visible<S: FormSlice + ?Sized>(&self, slice: &S) -> bool {
        self.visible_when.map_or(true, |gate| gate.holds(slice))
    }

    /// First failing rule's message, if any.
    pub fn validate(&self, value: &FieldValue) -> Option<&'static str> {
        let text = value.as_text()?;
        self.rules.iter().find_map(|rule| rule.check(text).err())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepSchema {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl StepSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates every visible field of `slice`. Hidden fields keep their value
    /// but are never reported.
    pub fn validate<S: FormSlice + ?Sized>(&self, slice: &S) -> FieldErrors {
        let errors = self
            .fields
            .iter()
            .filter(|spec| spec.is_visible(slice))
            .filter_map(|spec| {
                let value = slice.field(spec.name)?;
                spec.validate(&value).map(|message| FieldError {
                    field: spec.name,
                    message,
                })
            })
            .collect();

        FieldErrors { errors }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validation outcome for one step, in schema order. One entry per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Drops the error for `field`, used when the user edits it.
    pub fn clear_field(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccountDetails, PersonalInfo, Preferences};

    fn filled_personal_info() -> PersonalInfo {
        PersonalInfo {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_each_required_field_blocks() {
        for field in ["firstName", "lastName", "email"] {
            let mut info = filled_personal_info();
            info.set_field(field, FieldValue::Text(String::new()));

            let errors = PERSONAL_INFO.validate(&info);
            assert_eq!(errors.len(), 1, "only {field} should fail");
            assert!(errors.get(field).unwrap().ends_with("is required"));
        }
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut info = filled_personal_info();
        info.first_name = "   ".into();
        assert_eq!(
            PERSONAL_INFO.validate(&info).get("firstName"),
            Some("First name is required")
        );
    }

    #[test]
    fn test_first_failing_message_only() {
        let account = AccountDetails {
            username: "al".into(),
            password: "short".into(),
            ..Default::default()
        };
        let errors = ACCOUNT_DETAILS.validate(&account);
        assert_eq!(
            errors.get("username"),
            Some("Username must be at least 3 characters long")
        );
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_password_strength() {
        let mut account = AccountDetails {
            username: "ada".into(),
            password: "longenough".into(),
            ..Default::default()
        };
        let message = ACCOUNT_DETAILS.validate(&account).get("password").unwrap();
        assert!(message.starts_with("Password must contain"));

        account.password = "Str0ng!Pwd".into();
        assert!(ACCOUNT_DETAILS.validate(&account).is_empty());
    }

    #[test]
    fn test_invalid_email() {
        let mut info = filled_personal_info();
        info.email = "ada-at-x".into();
        assert_eq!(
            PERSONAL_INFO.validate(&info).get("email"),
            Some("Invalid email address")
        );
    }

    #[test]
    fn test_visibility_gates() {
        let mut info = PersonalInfo::default();
        let company = PERSONAL_INFO.field("companyDetails.companyName").unwrap();
        assert!(!company.is_visible(&info));
        info.occupation = "Employed".into();
        assert!(company.is_visible(&info));

        let mut prefs = Preferences::default();
        let accessibility = PREFERENCES.field("accessibility").unwrap();
        let language = PREFERENCES.field("language").unwrap();
        assert!(!accessibility.is_visible(&prefs));
        assert!(language.is_visible(&prefs));
        prefs.theme = "system".into();
        prefs.notifications = false;
        assert!(accessibility.is_visible(&prefs));
        assert!(!language.is_visible(&prefs));
    }

    #[test]
    fn test_schema_names_resolve_on_slices() {
        let info = PersonalInfo::default();
        let account = AccountDetails::default();
        let prefs = Preferences::default();
        for spec in PERSONAL_INFO.fields {
            assert!(info.field(spec.name).is_some(), "{}", spec.name);
        }
        for spec in ACCOUNT_DETAILS.fields {
            assert!(account.field(spec.name).is_some(), "{}", spec.name);
        }
        for spec in PREFERENCES.fields {
            assert!(prefs.field(spec.name).is_some(), "{}", spec.name);
        }
    }
}
