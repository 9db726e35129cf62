//! Credential actions: sign in, sign up, email verification, sign out.

use crate::api::auth::{
    auth_page::AuthPage,
    callback_query::CallbackQuery,
    login_request::LoginRequest,
    register_request::RegisterRequest,
    resend_request::ResendRequest,
    verification::{resend_signup_verification, send_signup_verification},
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::page_query::PageQuery;
use crate::gate::access_gate::{DASHBOARD_PATH, LOGIN_PATH};
use crate::session::cookies::{SetCookie, append_set_cookies};
use crate::session::request_session::RequestSession;
use crate::state::AppState;

use ft_auth::{hash_password, verify_password};
use ft_core::{OnboardingStep, validation};
use ft_db::{
    IdentityRepository, NewAccount, VerificationKind, VerificationTokenRepository,
    provision_account,
};

use axum::{
    Extension, Json,
    extract::{Form, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use log::{debug, error, info, warn};
use serde_json::{Value, json};

const CONFIRM_SIGNUP_PATH: &str = "/confirm-signup";
const VERIFICATION_FAILED_REDIRECT: &str = "/login?error=verification_failed";
const PROFILE_MISSING_REDIRECT: &str = "/login?error=profile_missing";
const RESEND_MESSAGE: &str =
    "If an account is waiting for confirmation, a new confirmation link has been sent.";

fn redirect_with_cookies(to: &str, cookies: &[SetCookie]) -> Response {
    let mut response = Redirect::to(to).into_response();
    append_set_cookies(response.headers_mut(), cookies);
    response
}

fn page(page: &'static str, action: &'static str, query: PageQuery) -> Json<AuthPage> {
    let error_message = query.error_message();
    Json(AuthPage {
        page,
        action,
        error: query.error,
        error_message,
    })
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid email or password")
}

/// GET /login
pub async fn login_page(Query(query): Query<PageQuery>) -> Json<AuthPage> {
    page("login", LOGIN_PATH, query)
}

/// GET /register
pub async fn register_page(Query(query): Query<PageQuery>) -> Json<AuthPage> {
    page("register", "/register", query)
}

/// GET /confirm-signup
pub async fn confirm_signup_page(Query(query): Query<PageQuery>) -> Json<AuthPage> {
    page("confirm-signup", CONFIRM_SIGNUP_PATH, query)
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginRequest>,
) -> ApiResult<Response> {
    let email = validation::email(&form.email)?;
    state.login_limiter.check(&email)?;

    let record = IdentityRepository::new(state.pool.clone())
        .find_by_email(&email)
        .await
        .map_err(|e| {
            error!("find_identity_by_email failed for {}: {}", email, e);
            ApiError::from(e)
        })?;

    let Some(record) = record else {
        debug!("Login for unknown email {}", email);
        return Err(invalid_credentials());
    };

    if !verify_password(&form.password, &record.password_hash)? {
        debug!("Wrong password for user {}", record.identity.id);
        return Err(invalid_credentials());
    }

    if state.auth.require_email_confirmation && !record.is_confirmed() {
        return Err(ApiError::unauthorized(
            "Please confirm your email address before signing in",
        ));
    }

    let cookies = state.sessions.start_session(&record.identity).await?;
    info!("User {} signed in", record.identity.id);

    Ok(redirect_with_cookies(DASHBOARD_PATH, &cookies))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterRequest>,
) -> ApiResult<Response> {
    let email = validation::email(&form.email)?;
    validation::password(&form.password)?;
    let first_name = validation::person_name("first_name", "First name", &form.first_name)?;
    let last_name = validation::person_name("last_name", "Last name", &form.last_name)?;

    let password_hash = hash_password(&form.password)?;
    let require_confirmation = state.auth.require_email_confirmation;

    let account = provision_account(
        &state.pool,
        NewAccount {
            email,
            password_hash,
            first_name,
            last_name,
            email_confirmed: !require_confirmation,
        },
    )
    .await?;

    let identity = account.identity;
    info!(
        "Provisioned user {} in household {}",
        identity.id, account.family.id
    );

    if require_confirmation {
        send_signup_verification(&state, &identity).await?;
        return Ok(Redirect::to(CONFIRM_SIGNUP_PATH).into_response());
    }

    let cookies = state.sessions.start_session(&identity).await?;
    Ok(redirect_with_cookies(OnboardingStep::FIRST.path(), &cookies))
}

/// POST /confirm-signup
///
/// The reply does not reveal whether the address is registered.
pub async fn resend_confirmation(
    State(state): State<AppState>,
    Form(form): Form<ResendRequest>,
) -> ApiResult<Json<Value>> {
    let email = validation::email(&form.email)?;

    let record = IdentityRepository::new(state.pool.clone())
        .find_by_email(&email)
        .await
        .map_err(|e| {
            error!("find_identity_by_email failed for {}: {}", email, e);
            ApiError::from(e)
        })?;

    match record {
        Some(record) if !record.is_confirmed() => {
            resend_signup_verification(&state, &record.identity).await?;
        }
        Some(_) => debug!("Resend requested for confirmed email {}", email),
        None => debug!("Resend requested for unknown email {}", email),
    }

    Ok(Json(json!({ "message": RESEND_MESSAGE })))
}

/// GET /auth/callback?token_hash=...&type=signup
pub async fn auth_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let (Some(token_hash), Some(kind)) = (query.token_hash, query.kind) else {
        return Redirect::to(VERIFICATION_FAILED_REDIRECT).into_response();
    };
    let Some(kind) = VerificationKind::parse(&kind) else {
        warn!("Verification callback with unknown type '{}'", kind);
        return Redirect::to(VERIFICATION_FAILED_REDIRECT).into_response();
    };

    let now = Utc::now();
    let identity_id = match VerificationTokenRepository::new(state.pool.clone())
        .consume(&token_hash, kind, now)
        .await
    {
        Ok(Some(id)) => id,
        Ok(None) => {
            debug!("Verification token unknown, used or expired");
            return Redirect::to(VERIFICATION_FAILED_REDIRECT).into_response();
        }
        Err(e) => {
            error!("consume_verification_token failed: {}", e);
            return Redirect::to(VERIFICATION_FAILED_REDIRECT).into_response();
        }
    };

    let identities = IdentityRepository::new(state.pool.clone());
    let record = match identities.confirm_email(identity_id, now).await {
        Ok(()) => identities.find_by_id(identity_id).await,
        Err(e) => Err(e),
    };
    let identity = match record {
        Ok(Some(record)) => record.identity,
        Ok(None) => return Redirect::to(VERIFICATION_FAILED_REDIRECT).into_response(),
        Err(e) => {
            error!("confirm_email failed for user {}: {}", identity_id, e);
            return Redirect::to(VERIFICATION_FAILED_REDIRECT).into_response();
        }
    };

    let profile = match state.profiles.load(&identity).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return Redirect::to(PROFILE_MISSING_REDIRECT).into_response(),
        Err(e) => {
            error!("load_profile failed for user {}: {}", identity.id, e);
            return Redirect::to(PROFILE_MISSING_REDIRECT).into_response();
        }
    };

    let cookies = match state.sessions.start_session(&identity).await {
        Ok(cookies) => cookies,
        Err(e) => return e.into_response(),
    };
    info!("User {} confirmed their email", identity.id);

    let destination = if profile.is_onboarded() {
        DASHBOARD_PATH
    } else {
        OnboardingStep::FIRST.path()
    };
    redirect_with_cookies(destination, &cookies)
}

/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    session: Option<Extension<RequestSession>>,
    headers: HeaderMap,
) -> Response {
    if let Some(identity) = session.as_ref().and_then(|s| s.identity()) {
        state.profiles.invalidate(identity.id).await;
        info!("User {} signed out", identity.id);
    }

    let cookies = state.sessions.end_session(&headers).await;
    redirect_with_cookies(LOGIN_PATH, &cookies)
}
