//! Calendar date handling
//!
//! All user-visible dates use the fixed `DD-MM-YYYY` format; note timestamps
//! additionally carry a wall-clock time component.

use chrono::NaiveDate;

use crate::error::{SatchelError, SatchelResult};

/// Format for calendar dates (due dates, finance dates, report bounds)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format for note creation timestamps
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Parse a `DD-MM-YYYY` string into a date
pub fn parse_date(s: &str) -> SatchelResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| SatchelError::DateFormat(s.trim().to_string()))
}

/// Render a date back to `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for `NaiveDate` fields persisted as `DD-MM-YYYY` strings
pub mod dd_mm_yyyy {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("15-01-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_date(" 01-02-2024 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_iso_order() {
        let err = parse_date("2024-01-15").unwrap_err();
        assert!(matches!(err, SatchelError::DateFormat(_)));
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(parse_date("31-02-2024").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }
}
