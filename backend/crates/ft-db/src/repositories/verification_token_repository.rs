use crate::rows;
use crate::Result as DbErrorResult;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// What a one-time verification token proves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationKind {
    Signup,
}

impl VerificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signup => "signup",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "signup" => Some(Self::Signup),
            _ => None,
        }
    }
}

pub struct VerificationTokenRepository {
    pool: SqlitePool,
}

impl VerificationTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        token_hash: &str,
        identity_id: Uuid,
        kind: VerificationKind,
        expires_at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO auth_verification_tokens
                    (token_hash, identity_id, kind, expires_at, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(token_hash)
        .bind(identity_id.to_string())
        .bind(kind.as_str())
        .bind(expires_at.timestamp())
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Mark a live token consumed and return its identity id. `None` when
    /// the token is unknown, of another kind, expired or already used.
    pub async fn consume(
        &self,
        token_hash: &str,
        kind: VerificationKind,
        now: DateTime<Utc>,
    ) -> DbErrorResult<Option<Uuid>> {
        let row = sqlx::query(
            r#"
                UPDATE auth_verification_tokens
                SET consumed_at = ?
                WHERE token_hash = ? AND kind = ? AND consumed_at IS NULL AND expires_at > ?
                RETURNING identity_id
            "#,
        )
        .bind(now.timestamp())
        .bind(token_hash)
        .bind(kind.as_str())
        .bind(now.timestamp())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(|r| rows::uuid(r, "identity_id"))
            .transpose()
    }

    /// Invalidate outstanding tokens, e.g. before a resend
    pub async fn consume_all_for_identity(
        &self,
        identity_id: Uuid,
        kind: VerificationKind,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                UPDATE auth_verification_tokens
                SET consumed_at = ?
                WHERE identity_id = ? AND kind = ? AND consumed_at IS NULL
            "#,
        )
        .bind(Utc::now().timestamp())
        .bind(identity_id.to_string())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
