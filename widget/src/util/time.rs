//! Timestamp formatting for message bubbles.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, Local, TimeZone, Utc};

/// `hh:mm AM` in the given zone.
pub fn format_time_in<Tz: TimeZone>(timestamp: DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(zone).format("%I:%M %p").to_string()
}

/// `hh:mm AM` in the viewer's local zone.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}
