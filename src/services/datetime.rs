//! Tolerant parsing of human-entered date and datetime strings.
//!
//! Parsing returns a Result so callers choose between rejecting bad input
//! and treating it as absent; the API handlers reject.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Accepted datetime formats, tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date/time string that matched none of the accepted formats.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unrecognized date/time: '{0}'")]
pub struct DateParseError(pub String);

/// Parse a datetime string. Accepts RFC 3339, `%Y-%m-%dT%H:%M`,
/// `%Y-%m-%dT%H:%M:%S`, and bare `%Y-%m-%d` (midnight). Naive inputs are
/// taken as UTC.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    Err(DateParseError(value.to_string()))
}

/// Parse a `%Y-%m-%d` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DateParseError(value.to_string()))
}

/// Parse an optional datetime field: absent or empty means None, a non-empty
/// unparseable string is an error.
pub fn parse_optional_datetime(
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, DateParseError> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_datetime(s).map(Some),
    }
}

/// Parse an optional date field: absent or empty means None, a non-empty
/// unparseable string is an error.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, DateParseError> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_datetime_formats() {
        assert_eq!(
            parse_datetime("2024-03-01T10:30").unwrap().minute(),
            30
        );
        assert_eq!(
            parse_datetime("2024-03-01T10:30:45").unwrap().second(),
            45
        );
        assert_eq!(parse_datetime("2024-03-01").unwrap().hour(), 0);
        assert_eq!(
            parse_datetime("2024-03-01T10:30:00Z").unwrap().hour(),
            10
        );
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("next tuesday").is_err());
        assert!(parse_datetime("2024/03/01").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("01/15/2024").is_err());
    }

    #[test]
    fn test_optional_parsers_treat_empty_as_absent() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert!(parse_optional_datetime(Some("bogus")).is_err());
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_optional_date(Some("bogus")).is_err());
    }
}
