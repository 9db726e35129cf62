mod common;

use common::{create_test_pool, provisioned};

use ft_db::{RefreshTokenRepository, VerificationKind, VerificationTokenRepository};

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_live_refresh_token_when_consumed_then_identity_returned_once() {
    // Given
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "dana@example.com", "Dana").await;
    let repo = RefreshTokenRepository::new(pool);
    repo.create("refresh-1", account.identity.id, Utc::now() + Duration::days(1))
        .await
        .unwrap();

    // When
    let first = repo.consume("refresh-1", Utc::now()).await.unwrap();
    let second = repo.consume("refresh-1", Utc::now()).await.unwrap();

    // Then
    assert_that!(first, some(eq(&account.identity)));
    assert_that!(second, none());
}

#[tokio::test]
async fn given_expired_refresh_token_when_consumed_then_none() {
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "dana@example.com", "Dana").await;
    let repo = RefreshTokenRepository::new(pool);
    repo.create("stale", account.identity.id, Utc::now() - Duration::seconds(1))
        .await
        .unwrap();

    let result = repo.consume("stale", Utc::now()).await.unwrap();

    assert_that!(result, none());
}

#[tokio::test]
async fn given_revoked_refresh_token_when_consumed_then_none() {
    // Given
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "dana@example.com", "Dana").await;
    let repo = RefreshTokenRepository::new(pool);
    repo.create("logout-me", account.identity.id, Utc::now() + Duration::days(1))
        .await
        .unwrap();

    // When
    let revoked = repo.revoke("logout-me").await.unwrap();
    let result = repo.consume("logout-me", Utc::now()).await.unwrap();

    // Then
    assert_that!(revoked, eq(true));
    assert_that!(result, none());
    assert_that!(repo.revoke("logout-me").await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_expired_tokens_when_delete_expired_then_only_expired_removed() {
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "dana@example.com", "Dana").await;
    let repo = RefreshTokenRepository::new(pool);
    repo.create("old", account.identity.id, Utc::now() - Duration::days(1))
        .await
        .unwrap();
    repo.create("new", account.identity.id, Utc::now() + Duration::days(1))
        .await
        .unwrap();

    let removed = repo.delete_expired(Utc::now()).await.unwrap();

    assert_that!(removed, eq(1));
    assert_that!(repo.consume("new", Utc::now()).await.unwrap(), some(anything()));
}

#[tokio::test]
async fn given_verification_token_when_consumed_twice_then_second_is_none() {
    // Given
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "jo@example.com", "Jo").await;
    let repo = VerificationTokenRepository::new(pool);
    repo.create(
        "hash-1",
        account.identity.id,
        VerificationKind::Signup,
        Utc::now() + Duration::hours(1),
    )
    .await
    .unwrap();

    // When
    let first = repo
        .consume("hash-1", VerificationKind::Signup, Utc::now())
        .await
        .unwrap();
    let second = repo
        .consume("hash-1", VerificationKind::Signup, Utc::now())
        .await
        .unwrap();

    // Then
    assert_that!(first, some(eq(account.identity.id)));
    assert_that!(second, none());
}

#[tokio::test]
async fn given_outstanding_tokens_when_consume_all_for_identity_then_old_links_die() {
    // Given
    let pool = create_test_pool().await;
    let account = provisioned(&pool, "jo@example.com", "Jo").await;
    let repo = VerificationTokenRepository::new(pool);
    let expires = Utc::now() + Duration::hours(1);
    repo.create("a", account.identity.id, VerificationKind::Signup, expires)
        .await
        .unwrap();
    repo.create("b", account.identity.id, VerificationKind::Signup, expires)
        .await
        .unwrap();

    // When
    let invalidated = repo
        .consume_all_for_identity(account.identity.id, VerificationKind::Signup)
        .await
        .unwrap();

    // Then
    assert_that!(invalidated, eq(2));
    let result = repo
        .consume("a", VerificationKind::Signup, Utc::now())
        .await
        .unwrap();
    assert_that!(result, none());
}
