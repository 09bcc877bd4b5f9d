//! Display formatting helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Render a backend timestamp like `Jan 5, 2024, 02:07 PM`.
/// Unparsable input is shown as-is.
pub fn format_upload_date(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });

    match parsed {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// `1 sheet`, `3 sheets`
pub fn sheet_badge(count: u32) -> String {
    if count == 1 {
        "1 sheet".to_string()
    } else {
        format!("{} sheets", count)
    }
}

/// Empty cell placeholder for optional task fields
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp() {
        assert_eq!(format_upload_date("2024-01-05T14:07:00"), "Jan 5, 2024, 02:07 PM");
        assert_eq!(
            format_upload_date("2024-11-23T09:30:15.123456"),
            "Nov 23, 2024, 09:30 AM"
        );
    }

    #[test]
    fn test_rfc3339_and_date_only() {
        assert_eq!(format_upload_date("2024-02-29T00:05:00+02:00"), "Feb 29, 2024, 12:05 AM");
        assert_eq!(format_upload_date("2024-07-04"), "Jul 4, 2024, 12:00 AM");
    }

    #[test]
    fn test_unparsable_date_falls_back() {
        assert_eq!(format_upload_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_sheet_badge() {
        assert_eq!(sheet_badge(0), "0 sheets");
        assert_eq!(sheet_badge(1), "1 sheet");
        assert_eq!(sheet_badge(4), "4 sheets");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("High")), "High");
        assert_eq!(or_dash(Some("  ")), "—");
        assert_eq!(or_dash(None), "—");
    }
}
