use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

pub const EMAIL_PATTERN: &str = r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

lazy_static! {
    static ref EMAIL_REGEX: Regex = RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .build()
        .unwrap();
}

pub fn email_regex() -> &'static Regex {
    &EMAIL_REGEX
}

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// A single synchronous check on a text value.
///
/// Only `Required` rejects empty input; the other rules pass on an empty value
/// so that an optional field is not reported twice.
#[derive(Clone, Copy)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    /// Compiled once, on first use.
    Pattern(fn() -> &'static Regex, &'static str),
    Satisfies(fn(&str) -> bool, &'static str),
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::Pattern(_, message)
            | Rule::Satisfies(_, message) => message,
        }
    }

    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let passed = match self {
            Rule::Required(_) => !value.trim().is_empty(),
            _ if value.is_empty() => true,
            Rule::MinLength(min, _) => value.chars().count() >= *min,
            Rule::Pattern(regex, _) => regex().is_match(value),
            Rule::Satisfies(check, _) => check(value),
        };

        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Required(_) => write!(f, "Required"),
            Rule::MinLength(min, _) => write!(f, "MinLength({min})"),
            Rule::Pattern(regex, _) => write!(f, "Pattern({})", regex().as_str()),
            Rule::Satisfies(..) => write!(f, "Satisfies"),
        }
    }
}

/// At least one lowercase, uppercase, digit and special character, drawn only
/// from letters, digits and `@$!%*?&`.
pub fn is_strong_password(value: &str) -> bool {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));

    allowed
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        let rule = Rule::Pattern(email_regex, "bad");
        assert!(rule.check("ada@x.com").is_ok());
        assert!(rule.check("ADA.L+tag@Example.ORG").is_ok());
        assert!(rule.check("ada@x").is_err());
        assert!(rule.check("ada@x.c").is_err());
        assert!(rule.check("a da@x.com").is_err());
    }

    #[test]
    fn test_email_regex_is_shared() {
        assert!(std::ptr::eq(email_regex(), email_regex()));
        assert_eq!(email_regex().as_str(), EMAIL_PATTERN);
    }

    #[test]
    fn test_non_required_rules_skip_empty() {
        assert!(Rule::MinLength(3, "m").check("").is_ok());
        assert!(Rule::Pattern(email_regex, "p").check("").is_ok());
        assert_eq!(Rule::Required("r").check(""), Err("r"));
    }

    #[test]
    fn test_min_length_counts_chars() {
        assert!(Rule::MinLength(3, "m").check("äöü").is_ok());
        assert!(Rule::MinLength(3, "m").check("äö").is_err());
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Str0ng!Pwd"));
        assert!(!is_strong_password("str0ng!pwd"));
        assert!(!is_strong_password("Strong!Pwd"));
        assert!(!is_strong_password("Str0ngPwd1"));
        assert!(!is_strong_password("Str0ng!Pwd#"));
        assert!(!is_strong_password("Str0ng! Pwd"));
    }
}
