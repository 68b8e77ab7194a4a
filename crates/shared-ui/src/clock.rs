use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// 12-hour wall clock, e.g. `9:05 AM`.
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%-I:%M %p").to_string()
}
