//! Validation Rules
//!
//! Each rule inspects one JSON field value. Length and format rules let empty
//! values through so that `Required` stays the only presence check.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email pattern is valid")
});

/// A single validation rule attached to a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
}

impl Rule {
    /// Returns true when `value` satisfies the rule
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Rule::Required => !is_empty(value),
            Rule::MinLength(min) => text_len(value).map_or(true, |len| len == 0 || len >= *min),
            Rule::MaxLength(max) => text_len(value).map_or(true, |len| len <= *max),
            Rule::Email => match value.as_str() {
                Some("") | None => true,
                Some(text) => is_email(text),
            },
        }
    }

    /// Short message shown next to the field
    pub fn message(&self) -> String {
        match self {
            Rule::Required => "This field is required".to_string(),
            Rule::MinLength(min) => format!("Use at least {} characters", min),
            Rule::MaxLength(max) => format!("Use at most {} characters", max),
            Rule::Email => "Enter a valid email address".to_string(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::MinLength(min) => write!(f, "minlength({})", min),
            Rule::MaxLength(max) => write!(f, "maxlength({})", max),
            Rule::Email => write!(f, "email"),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn text_len(value: &Value) -> Option<usize> {
    value.as_str().map(|s| s.chars().count())
}

fn is_email(text: &str) -> bool {
    if text.len() > EMAIL_MAX_LEN {
        return false;
    }
    match text.split_once('@') {
        Some((local, _)) if local.len() <= EMAIL_LOCAL_MAX_LEN => EMAIL_PATTERN.is_match(text),
        _ => false,
    }
}
