//! Input constraints shared by onboarding, settings and registration.
//!
//! Every validator returns the normalized (trimmed) value on success so
//! callers persist exactly what was checked.

use crate::models::catalog::{self, Country};
use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_HOUSEHOLD_NAME_LENGTH: usize = 2;
pub const MAX_HOUSEHOLD_NAME_LENGTH: usize = 100;
pub const MIN_PERSON_NAME_LENGTH: usize = 2;
pub const MAX_PERSON_NAME_LENGTH: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_EMAIL_LENGTH: usize = 254;

#[track_caller]
fn invalid(field: &str, message: String) -> CoreError {
    CoreError::Validation {
        message,
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub fn household_name(name: &str) -> CoreErrorResult<String> {
    let name = name.trim();
    let length = name.chars().count();

    if length < MIN_HOUSEHOLD_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("Household name must be at least {MIN_HOUSEHOLD_NAME_LENGTH} characters"),
        ));
    }
    if length > MAX_HOUSEHOLD_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("Household name must be less than {MAX_HOUSEHOLD_NAME_LENGTH} characters"),
        ));
    }

    Ok(name.to_string())
}

/// First or last name; `field` is echoed back in the error
#[track_caller]
pub fn person_name(field: &str, label: &str, value: &str) -> CoreErrorResult<String> {
    let value = value.trim();
    let length = value.chars().count();

    if length < MIN_PERSON_NAME_LENGTH {
        return Err(invalid(
            field,
            format!("{label} must be at least {MIN_PERSON_NAME_LENGTH} characters"),
        ));
    }
    if length > MAX_PERSON_NAME_LENGTH {
        return Err(invalid(
            field,
            format!("{label} must be less than {MAX_PERSON_NAME_LENGTH} characters"),
        ));
    }

    Ok(value.to_string())
}

#[track_caller]
pub fn country(code: &str) -> CoreErrorResult<&'static Country> {
    catalog::find_country(code.trim())
        .ok_or_else(|| invalid("country", "Please select a country".to_string()))
}

#[track_caller]
pub fn currency(code: &str) -> CoreErrorResult<String> {
    catalog::find_currency(code.trim())
        .map(|c| c.code.to_string())
        .ok_or_else(|| invalid("currency", "Please select a currency".to_string()))
}

#[track_caller]
pub fn date_format(format: &str) -> CoreErrorResult<String> {
    let format = format.trim();
    if catalog::is_known_date_format(format) {
        Ok(format.to_string())
    } else {
        Err(invalid(
            "date_format",
            "Please select a date format".to_string(),
        ))
    }
}

/// Lower-cased, trimmed email with a minimal shape check
#[track_caller]
pub fn email(email: &str) -> CoreErrorResult<String> {
    let email = email.trim().to_lowercase();

    let well_formed = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    };
    if !well_formed || email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email", "Please enter a valid email address".to_string()));
    }

    Ok(email)
}

#[track_caller]
pub fn password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(invalid(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}
