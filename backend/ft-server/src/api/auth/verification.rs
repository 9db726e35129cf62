//! Signup verification links.
//!
//! Outbound email is not wired up, so the link is written to the log where
//! an operator (or a developer running locally) can pick it up.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use ft_auth::generate_opaque_token;
use ft_core::Identity;
use ft_db::{VerificationKind, VerificationTokenRepository};

use chrono::{Duration, Utc};
use log::info;

pub async fn send_signup_verification(state: &AppState, identity: &Identity) -> ApiResult<()> {
    let tokens = VerificationTokenRepository::new(state.pool.clone());
    let token_hash = generate_opaque_token();
    let ttl = i64::try_from(state.auth.verification_ttl_secs).unwrap_or(i64::MAX);

    tokens
        .create(
            &token_hash,
            identity.id,
            VerificationKind::Signup,
            Utc::now() + Duration::seconds(ttl),
        )
        .await
        .map_err(|e| ApiError::store("create_verification_token", identity.id, e))?;

    info!(
        "Confirmation link for {}: {}",
        identity.email,
        callback_link(&state.auth.site_url, &token_hash)
    );
    Ok(())
}

pub fn callback_link(site_url: &str, token_hash: &str) -> String {
    format!(
        "{}/auth/callback?token_hash={}&type={}",
        site_url.trim_end_matches('/'),
        token_hash,
        VerificationKind::Signup.as_str()
    )
}

/// Replace any outstanding signup tokens with a fresh one
pub async fn resend_signup_verification(state: &AppState, identity: &Identity) -> ApiResult<()> {
    VerificationTokenRepository::new(state.pool.clone())
        .consume_all_for_identity(identity.id, VerificationKind::Signup)
        .await
        .map_err(|e| ApiError::store("consume_verification_tokens", identity.id, e))?;

    send_signup_verification(state, identity).await
}
