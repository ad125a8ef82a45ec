//! The user table: rows, columns and the sort/edit/delete controller.

pub mod controller;
pub mod rows;

pub use controller::{SortDirection, SortState, TableController};
pub use rows::{seed_rows, SortField, UserRow};
