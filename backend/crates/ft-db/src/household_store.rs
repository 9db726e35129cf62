use crate::{FamilyRepository, Result as DbErrorResult, UserRepository};

use ft_core::{OnboardingStep, TenantScope, Theme};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// Writes performed by the onboarding wizard
#[async_trait]
pub trait HouseholdStore: Send + Sync {
    async fn rename_household(&self, scope: TenantScope, name: &str) -> DbErrorResult<()>;

    async fn set_location(
        &self,
        scope: TenantScope,
        country: &str,
        currency: &str,
        date_format: &str,
    ) -> DbErrorResult<()>;

    async fn set_preferences(
        &self,
        scope: TenantScope,
        currency: &str,
        date_format: &str,
    ) -> DbErrorResult<()>;

    async fn set_onboarding_theme(&self, scope: TenantScope, theme: Theme) -> DbErrorResult<()>;

    /// Record that the member may now submit `to`. Returns false, writing
    /// nothing, when progress has already moved away from `from`.
    async fn advance_onboarding(
        &self,
        scope: TenantScope,
        from: OnboardingStep,
        to: OnboardingStep,
    ) -> DbErrorResult<bool>;

    /// Returns whether this call performed the transition
    async fn mark_onboarded(&self, scope: TenantScope) -> DbErrorResult<bool>;
}

pub struct SqliteHouseholdStore {
    users: UserRepository,
    families: FamilyRepository,
}

impl SqliteHouseholdStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            families: FamilyRepository::new(pool),
        }
    }
}

#[async_trait]
impl HouseholdStore for SqliteHouseholdStore {
    async fn rename_household(&self, scope: TenantScope, name: &str) -> DbErrorResult<()> {
        self.families.update_name(scope, name).await
    }

    async fn set_location(
        &self,
        scope: TenantScope,
        country: &str,
        currency: &str,
        date_format: &str,
    ) -> DbErrorResult<()> {
        self.families
            .update_location(scope, country, currency, date_format)
            .await
    }

    async fn set_preferences(
        &self,
        scope: TenantScope,
        currency: &str,
        date_format: &str,
    ) -> DbErrorResult<()> {
        self.families
            .update_preferences(scope, currency, date_format)
            .await
    }

    async fn set_onboarding_theme(&self, scope: TenantScope, theme: Theme) -> DbErrorResult<()> {
        self.users
            .set_onboarding_theme(scope.user_id, theme, Utc::now())
            .await
    }

    async fn advance_onboarding(
        &self,
        scope: TenantScope,
        from: OnboardingStep,
        to: OnboardingStep,
    ) -> DbErrorResult<bool> {
        self.users.advance_onboarding(scope.user_id, from, to).await
    }

    async fn mark_onboarded(&self, scope: TenantScope) -> DbErrorResult<bool> {
        self.users.mark_onboarded(scope.user_id, Utc::now()).await
    }
}
