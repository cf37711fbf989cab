//! Client-side validation of the referral form
//!
//! Every rule runs on every call; results are collected rather than
//! short-circuited. The email-format rule runs after the required rule and
//! writes to the same slot, so it wins for email fields.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

use super::form::{Course, Field, FormData};

/// Message used when an email field does not look like `local@domain.tld`
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// Field-level validation messages, in field display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: IndexMap<Field, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn set(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // Constant pattern; compiling it cannot fail
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Check a value against the `local@domain.tld` shape
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Validate the whole form.
///
/// The returned map has an entry for every invalid field and nothing else.
pub fn validate(form: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();

    for field in Field::ALL {
        if form.get(field).trim().is_empty() {
            errors.set(field, format!("{} is required", field.label()));
        }
    }

    if !form.course.trim().is_empty() && Course::from_id(&form.course).is_none() {
        errors.set(Field::Course, format!("{} is required", Field::Course.label()));
    }

    for field in Field::ALL.into_iter().filter(|f| f.is_email()) {
        if !is_valid_email(form.get(field)) {
            errors.set(field, INVALID_EMAIL_MESSAGE);
        }
    }

    errors
}
