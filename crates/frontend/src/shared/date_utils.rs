/// Utilities for date and time formatting
///
/// Dates are shown as DD-MM-YYYY; `<input type="date">` works with YYYY-MM-DD.
use chrono::{DateTime, NaiveDate, Utc};

const DISPLAY_DATE: &str = "%d-%m-%Y";
const INPUT_DATE: &str = "%Y-%m-%d";

/// Format a record timestamp as DD-MM-YYYY HH:MM (UTC)
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%d-%m-%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format an optional calendar date as DD-MM-YYYY
pub fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(DISPLAY_DATE).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Value for a date input (empty when unset)
pub fn date_input_value(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format(INPUT_DATE).to_string())
        .unwrap_or_default()
}

/// Parse a date input value; blank or malformed input gives `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE).ok()
}

/// Today in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "15-03-2024 14:02");
        assert_eq!(format_timestamp(None), "-");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 10, 31);
        assert_eq!(format_date(d), "31-10-2024");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_date_input_round_trip() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 5);
        assert_eq!(date_input_value(d), "2025-01-05");
        assert_eq!(parse_date_input("2025-01-05"), d);
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("05.01.2025"), None);
    }
}
