use std::collections::BTreeMap;
use std::fmt::{ Display, Formatter };
use regex::Regex;
use serde::{ Deserialize, Serialize };

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[+]?[1-9][0-9]{0,15}$").unwrap();
}

pub const REQUIRED_FIELDS: [&str; 6] = ["firstName", "lastName", "email", "phone", "service", "message"];

/// Field values of one submit attempt, keyed by the field's `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission(BTreeMap<String, String>);

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
    InvalidPhone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self.kind {
            FieldErrorKind::Required => "This field is required",
            FieldErrorKind::InvalidEmail => "Please enter a valid email address",
            FieldErrorKind::InvalidPhone => "Please enter a valid phone number",
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Spaces, hyphens and parentheses are separators and ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&digits)
}

/// Checks every required field, at most one error per field.
pub fn validate_submission(data: &FormSubmission) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = REQUIRED_FIELDS.iter()
        .filter_map(|&field| {
            let kind = match data.get(field) {
                None => FieldErrorKind::Required,
                Some(value) if value.trim().is_empty() => FieldErrorKind::Required,
                Some(value) if field == "email" && !is_valid_email(value) => FieldErrorKind::InvalidEmail,
                Some(value) if field == "phone" && !is_valid_phone(value) => FieldErrorKind::InvalidPhone,
                Some(_) => return None,
            };
            Some(FieldError { field, kind })
        })
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
