//! Date and timestamp text formats
//!
//! Dates are stored as `YYYY-MM-DD`, timestamps in SQLite's
//! `CURRENT_TIMESTAMP` layout (`YYYY-MM-DD HH:MM:SS`, UTC).

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike, Utc};

use super::entity::{DomainError, DomainResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time truncated to whole seconds, matching the stored precision
pub fn now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// The local calendar date, used for seeding and due-date windows
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse user-supplied date text. Empty input means "no date".
pub fn parse_date(input: &str) -> DomainResult<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DomainError::validation(format!("malformed date '{}', expected YYYY-MM-DD", trimmed)))
}

/// Parse a stored timestamp, tolerating fractional seconds and the `T` separator
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
        assert_eq!(parse_date("  ").unwrap(), None);
        assert!(matches!(parse_date("03/09/2024"), Err(DomainError::Validation(_))));
        assert!(matches!(parse_date("2024-02-30"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-02 03:04:05"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-02T03:04:05"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-01-02 03:04:05.250").map(|t| format_timestamp(t)),
            Some("2024-01-02 03:04:05".to_string())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_now_has_whole_seconds() {
        let ts = now();
        assert_eq!(ts.nanosecond(), 0);
        assert_eq!(parse_timestamp(&format_timestamp(ts)), Some(ts));
    }
}
