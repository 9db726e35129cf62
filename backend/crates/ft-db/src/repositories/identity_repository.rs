use crate::rows;
use crate::{DbError, Result as DbErrorResult};

use ft_core::Identity;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Identity row including its credential
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub identity: Identity,
    pub password_hash: String,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl IdentityRecord {
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            identity: Identity::new(rows::uuid(row, "id")?, row.try_get::<String, _>("email")?),
            password_hash: row.try_get("password_hash")?,
            email_confirmed_at: rows::optional_timestamp(row, "email_confirmed_at")?,
            created_at: rows::timestamp(row, "created_at")?,
        })
    }
}

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// `email` must already be normalized (trimmed, lower case)
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<IdentityRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, email_confirmed_at, created_at
                FROM auth_identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(IdentityRecord::from_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<IdentityRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, email_confirmed_at, created_at
                FROM auth_identities
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(IdentityRecord::from_row).transpose()
    }

    /// Idempotent; the first confirmation timestamp is kept
    pub async fn confirm_email(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE auth_identities
                SET email_confirmed_at = COALESCE(email_confirmed_at, ?)
                WHERE id = ?
            "#,
        )
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "identity",
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
