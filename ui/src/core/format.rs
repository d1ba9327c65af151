//! Formatting helpers for presenting vitals.

use time::{macros::format_description, OffsetDateTime};

pub fn format_percent(value: i32) -> String {
    format!("{value}%")
}

pub fn format_bpm(value: i32) -> String {
    format!("{value} bpm")
}

/// `HH:MM` stamp for the "Live · updated" line in the grid header.
pub fn clock_stamp() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Timestamped slug for snapshot filenames.
pub fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "snapshot".into())
}
