//! Append-only, newest-first record of completed registrations.

use crate::registration::form::FormData;
use serde::Serialize;
use std::collections::VecDeque;

/// Immutable record of a completed registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub newsletter: bool,
    pub terms: bool,
    /// Local time the client observed the success, already formatted
    pub submitted_at: String,
}

impl Submission {
    pub fn new(form: &FormData, id: u64, submitted_at: impl Into<String>) -> Self {
        Self {
            id,
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            newsletter: form.newsletter,
            terms: form.terms,
            submitted_at: submitted_at.into(),
        }
    }

    pub fn phone(&self) -> Option<&str> {
        if self.phone.is_empty() {
            None
        } else {
            Some(&self.phone)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionHistory {
    entries: VecDeque<Submission>,
}

impl SubmissionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission as the most recent entry
    pub fn record(&mut self, submission: Submission) {
        self.entries.push_front(submission);
    }

    /// Up to `limit` entries, most recent first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Submission> {
        self.entries.iter().take(limit)
    }

    pub fn latest(&self) -> Option<&Submission> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
