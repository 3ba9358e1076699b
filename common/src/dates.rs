//! Conversion between the date format users type (`DD/MM/YYYY`) and the
//! format the backend stores (`YYYY-MM-DDT00:00:00.000Z`).
//!
//! Every form goes through these two functions; none of them splits date
//! strings on its own.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use thiserror::Error;

const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const API_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("data vazia")]
    Empty,
    #[error("data inválida: {0:?}")]
    Malformed(String),
}

/// `17/05/1980` -> `1980-05-17T00:00:00.000Z`.
pub fn display_to_api(display: &str) -> Result<String, DateError> {
    let display = display.trim();
    if display.is_empty() {
        return Err(DateError::Empty);
    }
    let date = NaiveDate::parse_from_str(display, DISPLAY_FORMAT)
        .map_err(|_| DateError::Malformed(display.to_string()))?;
    Ok(format!("{}T00:00:00.000Z", date.format(API_DATE_FORMAT)))
}

/// `1980-05-17T00:00:00` (any time suffix, or none) -> `17/05/1980`.
pub fn api_to_display(api: &str) -> Result<String, DateError> {
    let api = api.trim();
    if api.is_empty() {
        return Err(DateError::Empty);
    }
    let date_part = api.split('T').next().unwrap_or(api);
    let date = NaiveDate::parse_from_str(date_part, API_DATE_FORMAT)
        .map_err(|_| DateError::Malformed(api.to_string()))?;
    Ok(date.format(DISPLAY_FORMAT).to_string())
}

/// Timestamp in the shape JavaScript's `toISOString` produces, used for the
/// survey's interview date.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
