//! Display formatting shared by the portal pages.

use chrono::{DateTime, NaiveDate};

/// `Mar 14, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// Render an RFC 3339 timestamp as `Mar 14, 2025 9:05 PM`. Anything that does
/// not parse is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `—` for missing or blank text.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

/// `1 infant`, `3 infants`.
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dates_are_human_readable() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_date(d), "Mar 4, 2025");
        assert_eq!(format_optional_date(None), "—");
    }

    #[test]
    fn timestamps_use_twelve_hour_clock() {
        assert_eq!(format_timestamp("2025-06-01T21:35:00Z"), "Jun 1, 2025 9:35 PM");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn blanks_become_dashes() {
        assert_eq!(or_dash(Some("  ")), "—");
        assert_eq!(or_dash(None), "—");
        assert_eq!(or_dash(Some("0244")), "0244");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "infant"), "1 infant");
        assert_eq!(pluralize(0, "visit"), "0 visits");
    }
}
