//! Converts dates coming from the calendar into the birth date string

use super::jalali::{DateConversionError, JalaliDate};
use chrono::{DateTime, NaiveDate};

/// Parse a Gregorian date as the calendar hands it over.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the calendar date in the
/// timestamp's own offset), and `YYYY/MM/DD`.
pub fn parse_gregorian(raw: &str) -> Result<NaiveDate, DateConversionError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .map_err(|_| DateConversionError::Unparseable(raw.to_string()))
}

/// Jalali `YYYY/MM/DD` for a raw Gregorian date
pub fn to_birth_date(raw: &str) -> Result<String, DateConversionError> {
    let gregorian = parse_gregorian(raw)?;
    let jalali = JalaliDate::from_gregorian(gregorian)?;
    Ok(jalali.to_string())
}
