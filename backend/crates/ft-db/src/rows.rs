//! Column decoding shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use ft_core::{Family, OnboardingStep, Profile, ReportingPeriod, Role, Theme};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) const PROFILE_COLUMNS: &str = "id, email, first_name, last_name, role, family_id, \
    active, theme, default_period, onboarding_step, set_onboarding_preferences_at, \
    onboarded_at, created_at, updated_at";

pub(crate) const FAMILY_COLUMNS: &str = "id, name, country, currency, date_format, timezone, \
    locale, version, created_at, updated_at";

#[track_caller]
fn decode_error(column: &'static str, message: impl ToString) -> DbError {
    DbError::Decode {
        column,
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
pub(crate) fn uuid(row: &SqliteRow, column: &'static str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| decode_error(column, e))
}

#[track_caller]
pub(crate) fn timestamp(row: &SqliteRow, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    let secs: i64 = row.try_get(column)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| decode_error(column, "timestamp out of range"))
}

#[track_caller]
pub(crate) fn optional_timestamp(
    row: &SqliteRow,
    column: &'static str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    let secs: Option<i64> = row.try_get(column)?;
    secs.map(|s| {
        DateTime::from_timestamp(s, 0).ok_or_else(|| decode_error(column, "timestamp out of range"))
    })
    .transpose()
}

#[track_caller]
fn parsed<T: FromStr>(row: &SqliteRow, column: &'static str) -> DbErrorResult<T>
where
    T::Err: ToString,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(|e| decode_error(column, e))
}

pub(crate) fn profile(row: &SqliteRow) -> DbErrorResult<Profile> {
    Ok(Profile {
        id: uuid(row, "id")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        role: parsed::<Role>(row, "role")?,
        family_id: uuid(row, "family_id")?,
        active: row.try_get("active")?,
        theme: parsed::<Theme>(row, "theme")?,
        default_period: parsed::<ReportingPeriod>(row, "default_period")?,
        onboarding_step: parsed::<OnboardingStep>(row, "onboarding_step")?,
        set_onboarding_preferences_at: optional_timestamp(row, "set_onboarding_preferences_at")?,
        onboarded_at: optional_timestamp(row, "onboarded_at")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}

pub(crate) fn family(row: &SqliteRow) -> DbErrorResult<Family> {
    Ok(Family {
        id: uuid(row, "id")?,
        name: row.try_get("name")?,
        country: row.try_get("country")?,
        currency: row.try_get("currency")?,
        date_format: row.try_get("date_format")?,
        timezone: row.try_get("timezone")?,
        locale: row.try_get("locale")?,
        version: row.try_get("version")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
