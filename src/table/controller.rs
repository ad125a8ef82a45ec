//! Working set of user rows plus the current sort column and direction.
//!
//! Sorting never reorders the stored rows: [`TableController::view`] builds a
//! sorted copy each time it is asked for one, so rows keep their insertion
//! order underneath and equal keys keep their relative order.

use crate::notification::Notification;
use crate::table::rows::{seed_rows, SortField, UserRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Same column flips the direction; a new column starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }

    /// Arrow for a column header, only for the active column
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.field == Some(field)).then(|| self.direction.arrow())
    }
}

/// Ordered copy of `rows` according to `sort`. Stable; input untouched.
pub fn view(rows: &[UserRow], sort: &SortState) -> Vec<UserRow> {
    let mut ordered = rows.to_vec();
    if let Some(field) = sort.field {
        ordered.sort_by(|a, b| match sort.direction {
            SortDirection::Asc => a.compare_by(b, field),
            SortDirection::Desc => b.compare_by(a, field),
        });
    }
    ordered
}

/// `rows` without the row whose id is `target_id`; unchanged if absent.
pub fn delete(rows: &[UserRow], target_id: u64) -> Vec<UserRow> {
    rows.iter().filter(|row| row.id != target_id).cloned().collect()
}

#[derive(Debug, Clone)]
pub struct TableController {
    rows: Vec<UserRow>,
    sort: SortState,
}

impl Default for TableController {
    fn default() -> Self {
        Self::new(seed_rows())
    }
}

impl TableController {
    pub fn new(rows: Vec<UserRow>) -> Self {
        Self {
            rows,
            sort: SortState::default(),
        }
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        log::info!(
            "Table: sorting by {} {:?}",
            field.key(),
            self.sort.direction
        );
    }

    pub fn view(&self) -> Vec<UserRow> {
        view(&self.rows, &self.sort)
    }

    pub fn find(&self, id: u64) -> Option<&UserRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Append a row. Rows whose id is already present are refused.
    pub fn append(&mut self, row: UserRow) -> bool {
        if self.find(row.id).is_some() {
            log::warn!("Table: refusing duplicate row id {}", row.id);
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Remove a row by id, returning it together with the notification to show.
    pub fn delete(&mut self, id: u64) -> Option<(UserRow, Notification)> {
        let row = self.find(id)?.clone();
        self.rows = delete(&self.rows, id);
        log::info!("Table: deleted user {} ({})", row.name, row.id);
        let notification = Notification::user_deleted(&row);
        Some((row, notification))
    }

    /// Editing only reports the row; the stored data is left as is.
    pub fn edit(&self, id: u64) -> Option<Notification> {
        self.find(id).map(Notification::editing_user)
    }
}
