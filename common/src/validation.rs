//! Client-side checks run before a form is submitted.

use url::Url;

use crate::dates::{self, DateError};
use crate::error::ValidationError;

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Picker values use `0` for "nothing selected".
pub fn required_choice(field: &'static str, id: i64) -> Result<(), ValidationError> {
    if id <= 0 {
        Err(ValidationError::MissingChoice(field))
    } else {
        Ok(())
    }
}

/// Empty is accepted; anything else must parse as an absolute URL.
pub fn optional_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidUrl(field)),
    }
}

/// Checks a required `DD/MM/YYYY` field and returns it in API format.
pub fn required_date(field: &'static str, value: &str) -> Result<String, ValidationError> {
    dates::display_to_api(value).map_err(|source| match source {
        DateError::Empty => ValidationError::MissingField(field),
        source => ValidationError::InvalidDate { field, source },
    })
}
