//! Locale-aware date formatting.

use chrono::{
    DateTime,
    NaiveDate,
    NaiveDateTime,
};
use thiserror::Error;

use crate::language::Language;

/// Defines errors that may occur when formatting dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input could not be parsed as a calendar date.
    #[error("invalid date: '{0}'")]
    InvalidDate(String),
}

/// Parses the date shapes the content API emits.
///
/// Accepted: `YYYY-MM-DD`, RFC 3339 date-times, and offset-less
/// `YYYY-MM-DDTHH:MM:SS[.frac]`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|dt| dt.date())
}

/// Formats `value` using the long date convention of `language`.
///
/// `"2024-03-05"` becomes `5 марта 2024 г.`, `March 5, 2024`,
/// `5. März 2024` or `5 de março de 2024` depending on the language.
///
/// # Errors
///
/// [`DateError::InvalidDate`] when the input parses as none of the accepted
/// shapes.
pub fn resolve_date(value: &str, language: Language) -> Result<String, DateError> {
    let date = parse_date(value).ok_or_else(|| DateError::InvalidDate(value.to_string()))?;
    let pattern = match language {
        Language::Ru => "%-d %B %Y г.",
        Language::En => "%B %-d, %Y",
        Language::De => "%-d. %B %Y",
        Language::Pt => "%-d de %B de %Y",
    };
    Ok(date.format_localized(pattern, language.locale()).to_string())
}
