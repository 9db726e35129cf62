use crate::{AuthError, hash_password, verify_password};

use googletest::prelude::*;

#[test]
fn given_hashed_password_when_verified_with_same_password_then_true() {
    // Given
    let hash = hash_password("correct horse battery").unwrap();

    // When
    let verified = verify_password("correct horse battery", &hash).unwrap();

    // Then
    assert_that!(verified, eq(true));
    assert_that!(hash.starts_with("$argon2"), eq(true));
}

#[test]
fn given_hashed_password_when_verified_with_other_password_then_false() {
    let hash = hash_password("correct horse battery").unwrap();

    let verified = verify_password("wrong horse battery", &hash).unwrap();

    assert_that!(verified, eq(false));
}

#[test]
fn given_same_password_twice_when_hashed_then_salts_differ() {
    let first = hash_password("same-password").unwrap();
    let second = hash_password("same-password").unwrap();

    assert_that!(first, not(eq(&second)));
}

#[test]
fn given_malformed_stored_hash_when_verified_then_error() {
    let result = verify_password("anything", "plaintext-not-a-phc-string");

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}
