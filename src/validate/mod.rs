//! Client-side form validation.
//!
//! Two fixed string formats plus required-field presence. Checks are
//! deliberately loose (length and separator position only, with no
//! letter/digit class on the licence), matching what the server has
//! historically accepted. Every rule short-circuits: the first violation
//! wins and carries its own message.

use thiserror::Error;

/// One broken rule. Validation never aggregates; callers surface the
/// first failure and stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("licence must look like ABC-1234")]
    LicenceFormat,

    #[error("year must look like 2020/2020")]
    YearFormat,

    #[error("pick a location on the map first")]
    MissingLocation,
}

/// Non-blank check, shared by every required field.
pub fn require_filled(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(())
}

/// `ABC-1234`: exactly eight characters with the dash at index 3.
pub fn validate_licence(licence: &str) -> Result<(), FormError> {
    require_filled("licence", licence)?;
    if licence.chars().count() != 8 || licence.chars().nth(3) != Some('-') {
        return Err(FormError::LicenceFormat);
    }
    Ok(())
}

/// `2020/2020`: exactly nine characters, the slash at index 4, and two
/// four-digit halves.
pub fn validate_year(year: &str) -> Result<(), FormError> {
    require_filled("year", year)?;
    if year.chars().count() != 9 || year.chars().nth(4) != Some('/') {
        return Err(FormError::YearFormat);
    }
    let parts: Vec<&str> = year.split('/').collect();
    if parts.len() != 2
        || parts
            .iter()
            .any(|part| part.len() != 4 || !part.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(FormError::YearFormat);
    }
    Ok(())
}
