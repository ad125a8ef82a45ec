//! Utility modules for the Craftui application.
//!
//! - [`datetime`] - Timestamp formatting for submissions and logs

pub mod datetime;
