//! Client-side validation of the registration form.
//!
//! Every rule runs independently so all problems are reported at once. The
//! validator is pure and cheap; callers re-run it whenever they need the
//! current state instead of caching a previous result.

use crate::constants::{
    ERROR_EMAIL_INVALID, ERROR_EMAIL_REQUIRED, ERROR_NAME_REQUIRED, ERROR_NAME_TOO_SHORT, ERROR_PHONE_INVALID,
    ERROR_TERMS_REQUIRED, NAME_MIN_LENGTH,
};
use crate::registration::form::{FormData, FormErrors, FormField};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimal shape check: something@something.something, no whitespace or extra `@`.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
});

/// Optional `+`, a non-zero leading digit, then at most 15 further digits.
static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
});

/// Validate a form and return the messages for every invalid field.
///
/// An empty result means the form can be submitted.
pub fn validate(form: &FormData) -> FormErrors {
    let mut errors = FormErrors::new();

    let name = trim_input(&form.name);
    if name.is_empty() {
        errors.insert(FormField::Name, ERROR_NAME_REQUIRED);
    } else if name.chars().count() < NAME_MIN_LENGTH {
        errors.insert(FormField::Name, ERROR_NAME_TOO_SHORT);
    }

    if trim_input(&form.email).is_empty() {
        errors.insert(FormField::Email, ERROR_EMAIL_REQUIRED);
    } else if !is_valid_email(&form.email) {
        errors.insert(FormField::Email, ERROR_EMAIL_INVALID);
    }

    if !form.phone.is_empty() && !is_valid_phone(&form.phone) {
        errors.insert(FormField::Phone, ERROR_PHONE_INVALID);
    }

    if !form.terms {
        errors.insert(FormField::Terms, ERROR_TERMS_REQUIRED);
    }

    errors
}

/// Trim surrounding whitespace, including the byte order mark U+FEFF that
/// `str::trim` keeps.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check a phone number after stripping common separators.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_SHAPE.is_match(&normalize_phone(phone))
}

/// Drop whitespace, hyphens and parentheses from a phone number.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Live per-field indicators for the "Form Status" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStatus {
    pub name_present: bool,
    pub email_valid: bool,
    pub terms_accepted: bool,
    pub ready: bool,
}

impl FormStatus {
    pub fn of(form: &FormData) -> Self {
        Self {
            name_present: !form.name.is_empty(),
            email_valid: !form.email.is_empty() && is_valid_email(&form.email),
            terms_accepted: form.terms,
            ready: validate(form).is_empty(),
        }
    }
}
