//! Session resolution from the access and refresh cookies.
//!
//! The access token is a short-lived JWT. When it is missing, expired or
//! close to expiry, the refresh token is consumed and a new pair is
//! issued. Resolution never fails: anything unusable yields an anonymous
//! session, and rejected credentials are cleared.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::session::cookies::{self, ACCESS_COOKIE, REFRESH_COOKIE, SetCookie};

use ft_auth::{AuthError, JwtValidator, TokenIssuer, generate_opaque_token};
use ft_config::AuthConfig;
use ft_core::Identity;
use ft_db::RefreshTokenRepository;

use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use log::{debug, error, warn};
use sqlx::SqlitePool;

/// Outcome of resolving one request's credentials
#[derive(Debug, Clone, Default)]
pub struct ResolvedSession {
    pub identity: Option<Identity>,
    /// Cookie writes to attach to the response
    pub cookies: Vec<SetCookie>,
}

impl ResolvedSession {
    fn anonymous() -> Self {
        Self::default()
    }

    fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            cookies: Vec::new(),
        }
    }
}

enum AccessState {
    Missing,
    Fresh(Identity),
    /// Valid but inside the refresh leeway
    Expiring(Identity),
    Expired,
    Rejected,
}

pub struct SessionResolver {
    validator: JwtValidator,
    issuer: TokenIssuer,
    refresh_tokens: RefreshTokenRepository,
    refresh_ttl_secs: i64,
    leeway_secs: i64,
    secure_cookies: bool,
}

impl SessionResolver {
    pub fn new(pool: SqlitePool, secret: &[u8], auth: &AuthConfig) -> Self {
        Self {
            validator: JwtValidator::with_hs256(secret),
            issuer: TokenIssuer::with_hs256(secret, auth.access_token_ttl_secs),
            refresh_tokens: RefreshTokenRepository::new(pool),
            refresh_ttl_secs: i64::try_from(auth.refresh_token_ttl_secs).unwrap_or(i64::MAX),
            leeway_secs: i64::try_from(auth.refresh_leeway_secs).unwrap_or(0),
            secure_cookies: auth.secure_cookies,
        }
    }

    pub async fn resolve(&self, headers: &HeaderMap) -> ResolvedSession {
        let access = self.access_state(cookies::cookie_value(headers, ACCESS_COOKIE));
        let refresh = cookies::cookie_value(headers, REFRESH_COOKIE);

        match (access, refresh) {
            (AccessState::Fresh(identity), _) => ResolvedSession::authenticated(identity),
            (AccessState::Expiring(identity), None) => ResolvedSession::authenticated(identity),
            (AccessState::Rejected, _) => self.rejected(),
            (AccessState::Missing, None) => ResolvedSession::anonymous(),
            (AccessState::Expired, None) => self.rejected(),
            (_, Some(refresh_token)) => self.rotate(refresh_token).await,
        }
    }

    fn access_state(&self, token: Option<&str>) -> AccessState {
        let Some(token) = token else {
            return AccessState::Missing;
        };

        match self.validator.validate(token) {
            Ok(claims) => match claims.identity() {
                Ok(identity) if claims.expires_within(Utc::now().timestamp(), self.leeway_secs) => {
                    AccessState::Expiring(identity)
                }
                Ok(identity) => AccessState::Fresh(identity),
                Err(_) => AccessState::Rejected,
            },
            Err(AuthError::TokenExpired { .. }) => AccessState::Expired,
            Err(e) => {
                debug!("Rejected access token: {}", e);
                AccessState::Rejected
            }
        }
    }

    async fn rotate(&self, refresh_token: &str) -> ResolvedSession {
        let identity = match self.refresh_tokens.consume(refresh_token, Utc::now()).await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                debug!("Refresh token unknown, revoked or expired");
                return self.rejected();
            }
            Err(e) => {
                // keep the cookies; the credential may still be good
                error!("consume_refresh_token failed: {}", e);
                return ResolvedSession::anonymous();
            }
        };

        match self.start_session(&identity).await {
            Ok(cookies) => {
                debug!("Rotated session for user {}", identity.id);
                ResolvedSession {
                    identity: Some(identity),
                    cookies,
                }
            }
            Err(e) => {
                warn!("Session rotation failed for user {}: {}", identity.id, e);
                self.rejected()
            }
        }
    }

    fn rejected(&self) -> ResolvedSession {
        ResolvedSession {
            identity: None,
            cookies: self.clear_cookies(),
        }
    }

    /// Issue a fresh token pair and return the cookie writes for it
    pub async fn start_session(&self, identity: &Identity) -> ApiResult<Vec<SetCookie>> {
        let access = self.issuer.issue_access(identity)?;
        let refresh_token = generate_opaque_token();
        let refresh_expires_at = Utc::now() + Duration::seconds(self.refresh_ttl_secs);

        self.refresh_tokens
            .create(&refresh_token, identity.id, refresh_expires_at)
            .await
            .map_err(|e| ApiError::store("create_refresh_token", identity.id, e))?;

        Ok(vec![
            SetCookie::new(
                ACCESS_COOKIE,
                access.token,
                self.issuer.access_ttl_secs(),
                self.secure_cookies,
            ),
            SetCookie::new(
                REFRESH_COOKIE,
                refresh_token,
                self.refresh_ttl_secs,
                self.secure_cookies,
            ),
        ])
    }

    /// Revoke the request's refresh token (if any) and clear both cookies
    pub async fn end_session(&self, headers: &HeaderMap) -> Vec<SetCookie> {
        if let Some(token) = cookies::cookie_value(headers, REFRESH_COOKIE)
            && let Err(e) = self.refresh_tokens.revoke(token).await
        {
            error!("revoke_refresh_token failed: {}", e);
        }
        self.clear_cookies()
    }

    pub fn clear_cookies(&self) -> Vec<SetCookie> {
        vec![
            SetCookie::clear(ACCESS_COOKIE, self.secure_cookies),
            SetCookie::clear(REFRESH_COOKIE, self.secure_cookies),
        ]
    }

    pub async fn prune_expired(&self) -> u64 {
        match self.refresh_tokens.delete_expired(Utc::now()).await {
            Ok(removed) => removed,
            Err(e) => {
                error!("delete_expired_refresh_tokens failed: {}", e);
                0
            }
        }
    }
}
