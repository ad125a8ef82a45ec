//! Registration form record and its per-field error map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Newsletter,
    Terms,
}

impl FormField {
    /// Fields in display order
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Newsletter,
        FormField::Terms,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Newsletter => "newsletter",
            FormField::Terms => "terms",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Human-readable label shown next to the control
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Phone => "Phone Number",
            FormField::Newsletter => "Subscribe to newsletter",
            FormField::Terms => "Accept Terms and Conditions",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter your full name",
            FormField::Email => "Enter your email",
            FormField::Phone => "Enter your phone number (optional)",
            FormField::Newsletter => "Get updates about new features and promotions",
            FormField::Terms => "Required to create an account",
        }
    }

    /// Text fields hold a string; the others are checkboxes.
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Phone)
    }

    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Terms)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The mutable record backing the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    /// Optional; an empty string means "not provided"
    pub phone: String,
    pub newsletter: bool,
    pub terms: bool,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field holds its initial value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Phone => Some(&self.phone),
            FormField::Newsletter | FormField::Terms => None,
        }
    }

    pub fn flag(&self, field: FormField) -> Option<bool> {
        match field {
            FormField::Newsletter => Some(self.newsletter),
            FormField::Terms => Some(self.terms),
            FormField::Name | FormField::Email | FormField::Phone => None,
        }
    }

    /// Replace the value of a text field. Returns false for checkbox fields.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Newsletter | FormField::Terms => return false,
        };
        *slot = value.into();
        true
    }

    /// Set a checkbox field. Returns false for text fields.
    pub fn set_flag(&mut self, field: FormField, value: bool) -> bool {
        match field {
            FormField::Newsletter => self.newsletter = value,
            FormField::Terms => self.terms = value,
            FormField::Name | FormField::Email | FormField::Phone => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation messages. Only invalid fields have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
