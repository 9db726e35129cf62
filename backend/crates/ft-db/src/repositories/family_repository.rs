//! Households. Every read and write is scoped by the caller's
//! `(user_id, family_id)` pair: the family must be the one the user's
//! profile points at, otherwise the statement touches no row and the call
//! fails with `TenantMismatch`.

use crate::rows::{self, FAMILY_COLUMNS};
use crate::{DbError, Result as DbErrorResult};

use ft_core::{Family, TenantScope};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteQueryResult;

const SCOPE_FILTER: &str = "id = ? AND id IN (SELECT family_id FROM users WHERE id = ?)";

pub struct FamilyRepository {
    pool: SqlitePool,
}

impl FamilyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_for_scope(&self, scope: TenantScope) -> DbErrorResult<Option<Family>> {
        let sql = format!("SELECT {FAMILY_COLUMNS} FROM families WHERE {SCOPE_FILTER}");
        let row = sqlx::query(&sql)
            .bind(scope.family_id.to_string())
            .bind(scope.user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(rows::family).transpose()
    }

    pub async fn update_name(&self, scope: TenantScope, name: &str) -> DbErrorResult<()> {
        let sql = format!(
            "UPDATE families SET name = ?, version = version + 1, updated_at = ? WHERE {SCOPE_FILTER}"
        );
        let result = sqlx::query(&sql)
            .bind(name)
            .bind(Utc::now().timestamp())
            .bind(scope.family_id.to_string())
            .bind(scope.user_id.to_string())
            .execute(&self.pool)
            .await?;

        Self::require_scope(result, scope)
    }

    /// Country together with the currency and date format that go with it
    pub async fn update_location(
        &self,
        scope: TenantScope,
        country: &str,
        currency: &str,
        date_format: &str,
    ) -> DbErrorResult<()> {
        let sql = format!(
            "UPDATE families SET country = ?, currency = ?, date_format = ?, \
             version = version + 1, updated_at = ? WHERE {SCOPE_FILTER}"
        );
        let result = sqlx::query(&sql)
            .bind(country)
            .bind(currency)
            .bind(date_format)
            .bind(Utc::now().timestamp())
            .bind(scope.family_id.to_string())
            .bind(scope.user_id.to_string())
            .execute(&self.pool)
            .await?;

        Self::require_scope(result, scope)
    }

    pub async fn update_preferences(
        &self,
        scope: TenantScope,
        currency: &str,
        date_format: &str,
    ) -> DbErrorResult<()> {
        let sql = format!(
            "UPDATE families SET currency = ?, date_format = ?, \
             version = version + 1, updated_at = ? WHERE {SCOPE_FILTER}"
        );
        let result = sqlx::query(&sql)
            .bind(currency)
            .bind(date_format)
            .bind(Utc::now().timestamp())
            .bind(scope.family_id.to_string())
            .bind(scope.user_id.to_string())
            .execute(&self.pool)
            .await?;

        Self::require_scope(result, scope)
    }

    #[track_caller]
    fn require_scope(result: SqliteQueryResult, scope: TenantScope) -> DbErrorResult<()> {
        if result.rows_affected() == 0 {
            return Err(DbError::TenantMismatch {
                user_id: scope.user_id,
                family_id: scope.family_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
