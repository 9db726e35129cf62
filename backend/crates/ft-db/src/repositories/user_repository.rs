//! Member profiles (`users` table).

use crate::rows::{self, PROFILE_COLUMNS};
use crate::{DbError, Result as DbErrorResult};

use ft_core::{OnboardingStep, Profile, ReportingPeriod, Theme};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteQueryResult;
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(rows::profile).transpose()
    }

    /// Members of one household, oldest first
    pub async fn list_by_family(&self, family_id: Uuid) -> DbErrorResult<Vec<Profile>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM users WHERE family_id = ? ORDER BY created_at, email"
        );
        let rows = sqlx::query(&sql)
            .bind(family_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(rows::profile).collect()
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        default_period: ReportingPeriod,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, default_period = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(default_period.as_str())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Self::require_row(result, id)
    }

    pub async fn update_theme(&self, id: Uuid, theme: Theme) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE users SET theme = ?, updated_at = ? WHERE id = ?")
            .bind(theme.as_str())
            .bind(Utc::now().timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Self::require_row(result, id)
    }

    /// Theme chosen in the wizard; also records when preferences were set
    pub async fn set_onboarding_theme(
        &self,
        id: Uuid,
        theme: Theme,
        at: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET theme = ?, set_onboarding_preferences_at = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(theme.as_str())
        .bind(at.timestamp())
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Self::require_row(result, id)
    }

    /// Moves wizard progress from `from` to `to`. Returns false when the
    /// stored progress is no longer `from`, leaving it untouched.
    pub async fn advance_onboarding(
        &self,
        id: Uuid,
        from: OnboardingStep,
        to: OnboardingStep,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET onboarding_step = ?, updated_at = ?
                WHERE id = ? AND onboarding_step = ?
            "#,
        )
        .bind(to.as_str())
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .bind(from.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Sets `onboarded_at` only if it is still NULL and the wizard
    /// preferences were recorded. Returns whether this call set it; an
    /// already onboarded user yields `Ok(false)`.
    pub async fn mark_onboarded(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET onboarded_at = ?, onboarding_step = 'complete', updated_at = ?
                WHERE id = ?
                  AND onboarded_at IS NULL
                  AND set_onboarding_preferences_at IS NOT NULL
            "#,
        )
        .bind(at.timestamp())
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        match self.find_by_id(id).await? {
            Some(profile) if profile.is_onboarded() => Ok(false),
            Some(_) => Err(DbError::OnboardingIncomplete {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Err(DbError::NotFound {
                entity: "user",
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn require_row(result: SqliteQueryResult, id: Uuid) -> DbErrorResult<()> {
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "user",
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
