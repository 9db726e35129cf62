//! Account provisioning: identity, household and profile are created in
//! one transaction, so a committed identity always has a profile.

use crate::{DbError, Result as DbErrorResult};

use ft_core::{Family, Identity, Profile, Role};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Registration input. Values must already be validated and normalized.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Skip email verification (confirmation disabled in config)
    pub email_confirmed: bool,
}

#[derive(Debug, Clone)]
pub struct ProvisionedAccount {
    pub identity: Identity,
    pub family: Family,
    pub profile: Profile,
}

pub async fn provision_account(
    pool: &SqlitePool,
    account: NewAccount,
) -> DbErrorResult<ProvisionedAccount> {
    let now = Utc::now();
    let identity = Identity::new(Uuid::new_v4(), account.email.clone());
    let family = Family::for_new_member(&account.first_name);
    // the first member of a new household administers it
    let profile = Profile::new(
        identity.id,
        account.email.clone(),
        account.first_name.clone(),
        account.last_name.clone(),
        Role::Admin,
        family.id,
    );

    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
            INSERT INTO auth_identities (id, email, password_hash, email_confirmed_at, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(identity.id.to_string())
    .bind(&identity.email)
    .bind(&account.password_hash)
    .bind(account.email_confirmed.then(|| now.timestamp()))
    .bind(now.timestamp())
    .execute(&mut *tx)
    .await;

    if let Err(sqlx::Error::Database(db_error)) = &inserted
        && db_error.is_unique_violation()
    {
        return Err(DbError::DuplicateEmail {
            email: account.email,
            location: ErrorLocation::from(Location::caller()),
        });
    }
    inserted?;

    sqlx::query(
        r#"
            INSERT INTO families (
                id, name, country, currency, date_format, timezone, locale,
                version, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(family.id.to_string())
    .bind(&family.name)
    .bind(&family.country)
    .bind(&family.currency)
    .bind(&family.date_format)
    .bind(&family.timezone)
    .bind(&family.locale)
    .bind(family.version)
    .bind(family.created_at.timestamp())
    .bind(family.updated_at.timestamp())
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
            INSERT INTO users (
                id, email, first_name, last_name, role, family_id, active,
                theme, default_period, onboarding_step, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(profile.id.to_string())
    .bind(&profile.email)
    .bind(&profile.first_name)
    .bind(&profile.last_name)
    .bind(profile.role.as_str())
    .bind(profile.family_id.to_string())
    .bind(profile.active)
    .bind(profile.theme.as_str())
    .bind(profile.default_period.as_str())
    .bind(profile.onboarding_step.as_str())
    .bind(profile.created_at.timestamp())
    .bind(profile.updated_at.timestamp())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(ProvisionedAccount {
        identity,
        family,
        profile,
    })
}
