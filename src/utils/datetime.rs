//! Date and time utility functions
//!
//! Submission timestamps are formatted once, when the registration succeeds,
//! and stored as text. The default format mirrors a typical en-US locale
//! rendering such as `10/18/2026, 02:15:07 PM`.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Write;

/// Default format for submission timestamps
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Format for log line prefixes
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Format a timestamp with a chrono format string
///
/// Invalid format strings produce an empty string instead of panicking;
/// use [`validate_format`] to reject them up front.
pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(format)).is_err() {
        out.clear();
    }
    out
}

/// Format the current local time
pub fn format_now(format: &str) -> String {
    format_timestamp(&Local::now(), format)
}

/// Check that a chrono format string can be rendered
pub fn validate_format(format: &str) -> Result<(), String> {
    let mut out = String::new();
    write!(out, "{}", Local::now().format(format)).map_err(|_| format!("invalid format string '{}'", format))
}
