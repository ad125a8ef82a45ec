use chrono::{Local, TimeZone, Utc};
use craftui::utils::datetime::{format_now, format_timestamp, validate_format, DEFAULT_TIMESTAMP_FORMAT};

#[test]
fn test_default_format() {
    let timestamp = Utc.with_ymd_and_hms(2026, 10, 18, 14, 15, 7).unwrap();
    assert_eq!(
        format_timestamp(&timestamp, DEFAULT_TIMESTAMP_FORMAT),
        "10/18/2026, 02:15:07 PM"
    );
}

#[test]
fn test_custom_format() {
    let timestamp = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(format_timestamp(&timestamp, "%Y-%m-%d %H:%M"), "2026-01-02 03:04");
}

#[test]
fn test_invalid_format_yields_empty_string() {
    let timestamp = Local::now();
    assert_eq!(format_timestamp(&timestamp, "%Q"), "");
}

#[test]
fn test_validate_format() {
    assert!(validate_format(DEFAULT_TIMESTAMP_FORMAT).is_ok());
    assert!(validate_format("%H:%M:%S").is_ok());
    assert!(validate_format("%Q").is_err());
}

#[test]
fn test_format_now() {
    assert_eq!(format_now("%Y").len(), 4);
}
