use super::rules::{email_regex, is_strong_password, Rule};
use super::{Expect, FieldKind, FieldSpec, SelectOption, StepSchema, Visibility};
use crate::model::{OCCUPATION_EMPLOYED, THEME_SYSTEM};

pub const OCCUPATION_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select occupation" },
    SelectOption { value: "Student", label: "Student" },
    SelectOption { value: "Employed", label: "Employed" },
    SelectOption { value: "Self-employed", label: "Self-employed" },
    SelectOption { value: "Other", label: "Other" },
];

pub const ACCOUNT_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "personal", label: "Personal" },
    SelectOption { value: "business", label: "Business" },
];

pub const THEME_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "light", label: "Light" },
    SelectOption { value: "dark", label: "Dark" },
    SelectOption { value: "system", label: "System" },
];

pub const LANGUAGE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "en", label: "English" },
    SelectOption { value: "es", label: "Spanish" },
    SelectOption { value: "fr", label: "French" },
];

pub const SECURITY_QUESTION_OPTIONS: &[&str] = &[
    "What was your first pet's name?",
    "What city were you born in?",
    "What is your mother's maiden name?",
    "What was your first car?",
    "What elementary school did you attend?",
];

const EMPLOYED: Option<Visibility> = Some(Visibility {
    field: "occupation",
    equals: Expect::Text(OCCUPATION_EMPLOYED),
});

pub static PERSONAL_INFO: StepSchema = StepSchema {
    title: "Personal Info",
    fields: &[
        FieldSpec {
            name: "firstName",
            label: "First Name",
            placeholder: "Enter your first name",
            kind: FieldKind::Text,
            rules: &[Rule::Required("First name is required")],
            visible_when: None,
        },
        FieldSpec {
            name: "lastName",
            label: "Last Name",
            placeholder: "Enter your last name",
            kind: FieldKind::Text,
            rules: &[Rule::Required("Last name is required")],
            visible_when: None,
        },
        FieldSpec {
            name: "email",
            label: "Email",
            placeholder: "Enter your email address",
            kind: FieldKind::Email,
            rules: &[
                Rule::Required("Email is required"),
                Rule::Pattern(email_regex, "Invalid email address"),
            ],
            visible_when: None,
        },
        FieldSpec {
            name: "occupation",
            label: "Occupation",
            placeholder: "",
            kind: FieldKind::Select(OCCUPATION_OPTIONS),
            rules: &[],
            visible_when: None,
        },
        FieldSpec {
            name: "companyDetails.companyName",
            label: "Company Name",
            placeholder: "Enter company name",
            kind: FieldKind::Text,
            rules: &[],
            visible_when: EMPLOYED,
        },
        FieldSpec {
            name: "companyDetails.position",
            label: "Position",
            placeholder: "Enter your position",
            kind: FieldKind::Text,
            rules: &[],
            visible_when: EMPLOYED,
        },
    ],
};

pub static ACCOUNT_DETAILS: StepSchema = StepSchema {
    title: "Account",
    fields: &[
        FieldSpec {
            name: "username",
            label: "Username",
            placeholder: "Choose a username",
            kind: FieldKind::Text,
            rules: &[
                Rule::Required("Username is required"),
                Rule::MinLength(3, "Username must be at least 3 characters long"),
            ],
            visible_when: None,
        },
        FieldSpec {
            name: "password",
            label: "Password",
            placeholder: "Create a strong password",
            kind: FieldKind::Password,
            rules: &[
                Rule::Required("Password is required"),
                Rule::MinLength(8, "Password must be at least 8 characters long"),
                Rule::Satisfies(
                    is_strong_password,
                    "Password must contain at least one uppercase letter, one lowercase letter, one number and one special character",
                ),
            ],
            visible_when: None,
        },
        FieldSpec {
            name: "accountType",
            label: "Account Type",
            placeholder: "",
            kind: FieldKind::Select(ACCOUNT_TYPE_OPTIONS),
            rules: &[],
            visible_when: None,
        },
        FieldSpec {
            name: "preferences.notifications",
            label: "Receive account notifications",
            placeholder: "",
            kind: FieldKind::Checkbox,
            rules: &[],
            visible_when: None,
        },
        FieldSpec {
            name: "preferences.twoFactorAuth",
            label: "Enable two-factor authentication",
            placeholder: "",
            kind: FieldKind::Checkbox,
            rules: &[],
            visible_when: None,
        },
    ],
};

pub static PREFERENCES: StepSchema = StepSchema {
    title: "Preferences",
    fields: &[
        FieldSpec {
            name: "theme",
            label: "Theme",
            placeholder: "",
            kind: FieldKind::Select(THEME_OPTIONS),
            rules: &[],
            visible_when: None,
        },
        FieldSpec {
            name: "language",
            label: "Language",
            placeholder: "",
            kind: FieldKind::Select(LANGUAGE_OPTIONS),
            rules: &[],
            visible_when: Some(Visibility {
                field: "notifications",
                equals: Expect::Flag(true),
            }),
        },
        FieldSpec {
            name: "notifications",
            label: "Enable notifications",
            placeholder: "",
            kind: FieldKind::Checkbox,
            rules: &[],
            visible_when: None,
        },
        FieldSpec {
            name: "accessibility",
            label: "Accessibility features",
            placeholder: "",
            kind: FieldKind::Checkbox,
            rules: &[],
            visible_when: Some(Visibility {
                field: "theme",
                equals: Expect::Text(THEME_SYSTEM),
            }),
        },
    ],
};
