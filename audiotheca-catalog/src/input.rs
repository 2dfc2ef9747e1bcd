//! Parsing of user-entered field values.
//!
//! Forms hand over raw strings; these helpers turn them into the typed
//! values the store expects. Empty input means "not provided" for every
//! optional field.

use chrono::NaiveDate;
use thiserror::Error;

/// Display and input format for dates: day.month.year.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid date '{0}': expected DD.MM.YYYY")]
    InvalidDate(String),
    #[error("Invalid price '{0}'")]
    InvalidPrice(String),
    #[error("Price must not be negative: {0}")]
    NegativePrice(String),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Unknown condition '{0}' (expected New, Good, Fair, Poor or Collectible)")]
    UnknownCondition(String),
    #[error("Unknown artist type '{0}' (expected Solo, Band, Orchestra or Other)")]
    UnknownArtistType(String),
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse an optional `DD.MM.YYYY` date.
pub fn parse_date(s: &str) -> Result<Option<NaiveDate>, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map(Some)
        .map_err(|_| InputError::InvalidDate(s.to_string()))
}

/// Parse an optional price. Accepts `,` or `.` as the decimal separator.
pub fn parse_price(s: &str) -> Result<Option<f64>, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let value: f64 = s
        .replace(',', ".")
        .parse()
        .map_err(|_| InputError::InvalidPrice(s.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::InvalidPrice(s.to_string()));
    }
    if value < 0.0 {
        return Err(InputError::NegativePrice(s.to_string()));
    }
    Ok(Some(value))
}

/// Parse an optional integer field (years, track counts, durations).
pub fn parse_optional_int<T: std::str::FromStr>(s: &str) -> Result<Option<T>, InputError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse()
        .map(Some)
        .map_err(|_| InputError::InvalidNumber(s.to_string()))
}

/// Trim a free-text field, mapping empty input to `None`.
pub fn optional_text(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Trim a mandatory text field, rejecting empty input.
pub fn required_text(s: &str, field: &'static str) -> Result<String, InputError> {
    optional_text(s).ok_or(InputError::Missing(field))
}
