//! Custom Askama template filters and display helpers.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format an ISO-8601 timestamp from the Shop API for display.
///
/// Falls back to the raw string when the timestamp does not parse, which
/// keeps the page rendering even if the remote changes its format.
#[must_use]
pub fn format_date(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_or_else(
        |_| raw.to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date("2026-02-01T12:30:00"), "Feb 1, 2026");
        assert_eq!(format_date("2026-02-01T12:30:00.123456"), "Feb 1, 2026");
    }

    #[test]
    fn test_format_date_fallback() {
        assert_eq!(format_date("soon"), "soon");
    }
}
