//! User rows and the sortable columns of the user table.

use crate::constants::{DEFAULT_ROLE, DEFAULT_STATUS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl UserRow {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    /// A freshly registered user: role "User", status "Active"
    pub fn registered(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(id, name, email, DEFAULT_ROLE, DEFAULT_STATUS)
    }

    /// Text shown in the given column
    pub fn cell(&self, field: SortField) -> String {
        match field {
            SortField::Id => self.id.to_string(),
            SortField::Name => self.name.clone(),
            SortField::Email => self.email.clone(),
            SortField::Role => self.role.clone(),
            SortField::Status => self.status.clone(),
        }
    }

    /// Natural ordering of a column: numeric for ids, lexicographic otherwise
    pub fn compare_by(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Id => self.id.cmp(&other.id),
            SortField::Name => self.name.cmp(&other.name),
            SortField::Email => self.email.cmp(&other.email),
            SortField::Role => self.role.cmp(&other.role),
            SortField::Status => self.status.cmp(&other.status),
        }
    }
}

/// The rows every session starts with
pub fn seed_rows() -> Vec<UserRow> {
    vec![
        UserRow::new(1, "John Doe", "john@example.com", "Admin", "Active"),
        UserRow::new(2, "Jane Smith", "jane@example.com", "User", "Active"),
        UserRow::new(3, "Bob Johnson", "bob@example.com", "Editor", "Inactive"),
        UserRow::new(4, "Alice Brown", "alice@example.com", "User", "Active"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Name,
    Email,
    Role,
    Status,
}

impl SortField {
    /// Columns in display order; the number key for a column is its index + 1
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Name,
        SortField::Email,
        SortField::Role,
        SortField::Status,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Role => "role",
            SortField::Status => "status",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Name => "Name",
            SortField::Email => "Email",
            SortField::Role => "Role",
            SortField::Status => "Status",
        }
    }

    /// Column selected by a `1`-`5` key press
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
