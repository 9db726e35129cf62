//! Integration tests for sign-up, verification, sign-in and sign-out
mod common;

use crate::common::*;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_with_confirmation_sends_to_confirm_page_without_session() {
    let state = create_test_state().await;

    let response = send(
        &state,
        form(
            "POST",
            "/register",
            "email=sam%40example.com&password=correct-horse-battery&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;

    assert_redirect(&response, "/confirm-signup");
    assert!(set_cookies(response.headers()).is_empty());

    // provisioning is synchronous: identity, household and profile exist
    let id = identity_id_for(&state.pool, "sam@example.com").await;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
        .bind(id.to_string())
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(users, 1);
}

#[tokio::test]
async fn test_register_validation_error_returns_422() {
    let state = create_test_state().await;

    let response = send(
        &state,
        form(
            "POST",
            "/register",
            "email=sam%40example.com&password=short&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_register_duplicate_email_returns_409() {
    let state = create_test_state().await;
    create_account(&state.pool, "sam@example.com").await;

    let response = send(
        &state,
        form(
            "POST",
            "/register",
            "email=SAM%40example.com&password=correct-horse-battery&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
}

#[tokio::test]
async fn test_register_without_confirmation_starts_session_in_onboarding() {
    let mut config = test_config();
    config.auth.require_email_confirmation = false;
    let state = create_test_state_with(config).await;

    let response = send(
        &state,
        form(
            "POST",
            "/register",
            "email=sam%40example.com&password=correct-horse-battery&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;

    assert_redirect(&response, "/onboarding/household");
    assert!(set_cookie_value(response.headers(), ACCESS_COOKIE).is_some());
    assert!(set_cookie_value(response.headers(), REFRESH_COOKIE).is_some());
}

#[tokio::test]
async fn test_verification_callback_confirms_and_starts_onboarding() {
    let state = create_test_state().await;
    send(
        &state,
        form(
            "POST",
            "/register",
            "email=sam%40example.com&password=correct-horse-battery&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;
    let id = identity_id_for(&state.pool, "sam@example.com").await;
    let token = latest_verification_token(&state.pool, id).await;

    let response = send(
        &state,
        get(&format!("/auth/callback?token_hash={token}&type=signup"), None),
    )
    .await;

    assert_redirect(&response, "/onboarding/household");
    let cookies = cookie_header(response.headers());
    assert!(cookies.contains(ACCESS_COOKIE));

    // the session works straight away
    let response = send(&state, get("/onboarding/household", Some(&cookies))).await;
    assert_eq!(response.status(), StatusCode::OK);

    // and the link is single use
    let response = send(
        &state,
        get(&format!("/auth/callback?token_hash={token}&type=signup"), None),
    )
    .await;
    assert_redirect(&response, "/login?error=verification_failed");
}

#[tokio::test]
async fn test_verification_callback_rejects_bad_links() {
    let state = create_test_state().await;

    for uri in [
        "/auth/callback",
        "/auth/callback?token_hash=nope&type=signup",
        "/auth/callback?token_hash=nope&type=magiclink",
    ] {
        let response = send(&state, get(uri, None)).await;
        assert_redirect(&response, "/login?error=verification_failed");
    }
}

#[tokio::test]
async fn test_login_page_echoes_error_code() {
    let state = create_test_state().await;

    let response = send(&state, get("/login?error=profile_missing", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"], "login");
    assert_eq!(json["error"], "profile_missing");
    assert!(json["error_message"].is_string());
}

#[tokio::test]
async fn test_login_sets_both_session_cookies() {
    let state = create_test_state().await;
    create_account(&state.pool, "sam@example.com").await;

    let response = send(
        &state,
        form(
            "POST",
            "/login",
            "email=sam%40example.com&password=correct-horse-battery",
            None,
        ),
    )
    .await;

    assert_redirect(&response, "/dashboard");
    let cookies = set_cookies(response.headers());
    assert_eq!(cookies.len(), 2);
    assert!(set_cookie_value(response.headers(), ACCESS_COOKIE).is_some());
    assert!(set_cookie_value(response.headers(), REFRESH_COOKIE).is_some());
}

#[tokio::test]
async fn test_login_wrong_password_returns_401() {
    let state = create_test_state().await;
    create_account(&state.pool, "sam@example.com").await;

    let response = send(
        &state,
        form("POST", "/login", "email=sam%40example.com&password=wrong-password", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(response.headers()).is_empty());
}

#[tokio::test]
async fn test_login_unconfirmed_email_rejected() {
    let state = create_test_state().await;
    send(
        &state,
        form(
            "POST",
            "/register",
            "email=sam%40example.com&password=correct-horse-battery&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;

    let response = send(
        &state,
        form(
            "POST",
            "/login",
            "email=sam%40example.com&password=correct-horse-battery",
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_attempts_are_rate_limited_per_email() {
    let state = create_test_state().await;
    create_account(&state.pool, "sam@example.com").await;

    for _ in 0..5 {
        let response = send(
            &state,
            form("POST", "/login", "email=sam%40example.com&password=wrong-password", None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = send(
        &state,
        form(
            "POST",
            "/login",
            "email=sam%40example.com&password=correct-horse-battery",
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // other addresses are unaffected
    let response = send(
        &state,
        form("POST", "/login", "email=alex%40example.com&password=whatever1", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_resend_confirmation_is_generic() {
    let state = create_test_state().await;

    let response = send(
        &state,
        form("POST", "/confirm-signup", "email=nobody%40example.com", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_resend_confirmation_replaces_outstanding_token() {
    let state = create_test_state().await;
    send(
        &state,
        form(
            "POST",
            "/register",
            "email=sam%40example.com&password=correct-horse-battery&first_name=Sam&last_name=Rivera",
            None,
        ),
    )
    .await;
    let id = identity_id_for(&state.pool, "sam@example.com").await;
    let first = latest_verification_token(&state.pool, id).await;

    send(
        &state,
        form("POST", "/confirm-signup", "email=sam%40example.com", None),
    )
    .await;
    let second = latest_verification_token(&state.pool, id).await;

    assert_ne!(first, second);
    let response = send(
        &state,
        get(&format!("/auth/callback?token_hash={first}&type=signup"), None),
    )
    .await;
    assert_redirect(&response, "/login?error=verification_failed");
}

#[tokio::test]
async fn test_logout_clears_cookies_and_revokes_refresh_token() {
    let state = create_test_state().await;
    let account = create_account(&state.pool, "sam@example.com").await;
    mark_onboarded(&state.pool, account.identity.id).await;
    let cookies = login(&state, "sam@example.com", PASSWORD).await;

    let response = send(&state, form("POST", "/logout", "", Some(&cookies))).await;

    assert_redirect(&response, "/login");
    assert_eq!(set_cookie_value(response.headers(), ACCESS_COOKIE), Some(String::new()));
    assert_eq!(set_cookie_value(response.headers(), REFRESH_COOKIE), Some(String::new()));

    let revoked: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM auth_refresh_tokens WHERE revoked_at IS NOT NULL",
    )
    .fetch_one(&state.pool)
    .await
    .unwrap();
    assert_eq!(revoked, 1);
}
