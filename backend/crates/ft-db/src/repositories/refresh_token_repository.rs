//! Opaque refresh tokens. A token is single use: `consume` revokes it in
//! the same statement that reads it, so two concurrent rotations of the
//! same token cannot both succeed.

use crate::rows;
use crate::Result as DbErrorResult;

use ft_core::Identity;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct RefreshTokenRepository {
    pool: SqlitePool,
}

impl RefreshTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        token: &str,
        identity_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO auth_refresh_tokens (token, identity_id, expires_at, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(token)
        .bind(identity_id.to_string())
        .bind(expires_at.timestamp())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Revoke a live token and return its identity. `None` when the token is
    /// unknown, already revoked or expired.
    pub async fn consume(&self, token: &str, now: DateTime<Utc>) -> DbErrorResult<Option<Identity>> {
        let mut tx = self.pool.begin().await?;

        let revoked = sqlx::query(
            r#"
                UPDATE auth_refresh_tokens
                SET revoked_at = ?
                WHERE token = ? AND revoked_at IS NULL AND expires_at > ?
                RETURNING identity_id
            "#,
        )
        .bind(now.timestamp())
        .bind(token)
        .bind(now.timestamp())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(revoked) = revoked else {
            tx.rollback().await?;
            return Ok(None);
        };
        let identity_id = rows::uuid(&revoked, "identity_id")?;

        let email_row = sqlx::query("SELECT email FROM auth_identities WHERE id = ?")
            .bind(identity_id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        match email_row {
            Some(row) => Ok(Some(Identity::new(
                identity_id,
                row.try_get::<String, _>("email")?,
            ))),
            None => Ok(None),
        }
    }

    /// Returns whether a live token was revoked
    pub async fn revoke(&self, token: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE auth_refresh_tokens
                SET revoked_at = ?
                WHERE token = ? AND revoked_at IS NULL
            "#,
        )
        .bind(Utc::now().timestamp())
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Drop tokens that expired before `cutoff`; returns the number removed
    pub async fn delete_expired(&self, cutoff: DateTime<Utc>) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM auth_refresh_tokens WHERE expires_at <= ?")
            .bind(cutoff.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
