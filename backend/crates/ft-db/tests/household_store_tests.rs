mod common;

use common::{create_test_pool, provisioned};

use ft_core::{OnboardingStep, TenantScope, Theme};
use ft_db::{DbError, HouseholdStore, SqliteHouseholdStore, UserRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_sqlite_store_when_wizard_writes_applied_then_profile_is_onboarded() {
    // Given
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "mo@example.com", "Mo").await;
    let store = SqliteHouseholdStore::new(pool.clone());
    let scope = account.profile.scope();

    // When
    store.rename_household(scope, "Mo & Co").await.unwrap();
    store.set_location(scope, "CA", "CAD", "%Y-%m-%d").await.unwrap();
    store.set_preferences(scope, "CAD", "%d/%m/%Y").await.unwrap();
    store.set_onboarding_theme(scope, Theme::Light).await.unwrap();
    let transitioned = store.mark_onboarded(scope).await.unwrap();

    // Then
    assert_that!(transitioned, eq(true));
    let profile = UserRepository::new(pool)
        .find_by_id(account.identity.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(profile.is_onboarded(), eq(true));
    assert_that!(profile.theme, eq(Theme::Light));
    assert_that!(profile.onboarding_step, eq(OnboardingStep::Complete));
}

#[tokio::test]
async fn given_theme_not_chosen_when_mark_onboarded_then_rejected() {
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "mo@example.com", "Mo").await;
    let store = SqliteHouseholdStore::new(pool);

    let result = store.mark_onboarded(account.profile.scope()).await;

    assert!(matches!(result, Err(DbError::OnboardingIncomplete { .. })));
}

#[tokio::test]
async fn given_forged_scope_when_set_location_then_tenant_mismatch() {
    let pool = create_test_pool().await;
    let me = provisioned(&pool, "mo@example.com", "Mo").await;
    let other = provisioned(&pool, "jay@example.com", "Jay").await;
    let store = SqliteHouseholdStore::new(pool);

    let result = store
        .set_location(TenantScope::new(me.identity.id, other.family.id), "JP", "JPY", "%Y/%m/%d")
        .await;

    assert!(matches!(result, Err(DbError::TenantMismatch { .. })));
}
