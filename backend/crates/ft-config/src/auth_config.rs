use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_LEEWAY_SECS,
    DEFAULT_REFRESH_TOKEN_TTL_SECS, DEFAULT_REQUIRE_EMAIL_CONFIRMATION, DEFAULT_SECURE_COOKIES,
    DEFAULT_SITE_URL, DEFAULT_VERIFICATION_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS,
    MAX_REFRESH_TOKEN_TTL_SECS, MAX_VERIFICATION_TTL_SECS, MIN_ACCESS_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_VERIFICATION_TTL_SECS,
};

use serde::Deserialize;

/// Session credentials and identity-store settings.
///
/// When `jwt_secret` is unset the server generates an ephemeral secret at
/// startup, so sessions do not survive a restart.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for access tokens (at least 32 characters)
    pub jwt_secret: Option<String>,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    /// Rotate the session when the access token expires within this window
    pub refresh_leeway_secs: u64,
    pub verification_ttl_secs: u64,
    /// Adds `Secure` to session cookies; enable behind HTTPS
    pub secure_cookies: bool,
    pub require_email_confirmation: bool,
    /// Public base URL used in verification links
    pub site_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            refresh_leeway_secs: DEFAULT_REFRESH_LEEWAY_SECS,
            verification_ttl_secs: DEFAULT_VERIFICATION_TTL_SECS,
            secure_cookies: DEFAULT_SECURE_COOKIES,
            require_email_confirmation: DEFAULT_REQUIRE_EMAIL_CONFIRMATION,
            site_url: String::from(DEFAULT_SITE_URL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.access_token_ttl_secs < MIN_ACCESS_TOKEN_TTL_SECS
            || self.access_token_ttl_secs > MAX_ACCESS_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.access_token_ttl_secs must be {}-{}, got {}",
                MIN_ACCESS_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS, self.access_token_ttl_secs
            )));
        }

        if self.refresh_token_ttl_secs < self.access_token_ttl_secs
            || self.refresh_token_ttl_secs > MAX_REFRESH_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl_secs must be {}-{}, got {}",
                self.access_token_ttl_secs, MAX_REFRESH_TOKEN_TTL_SECS, self.refresh_token_ttl_secs
            )));
        }

        if self.refresh_leeway_secs >= self.access_token_ttl_secs {
            return Err(ConfigError::auth(format!(
                "auth.refresh_leeway_secs must be less than auth.access_token_ttl_secs ({}), got {}",
                self.access_token_ttl_secs, self.refresh_leeway_secs
            )));
        }

        if self.verification_ttl_secs < MIN_VERIFICATION_TTL_SECS
            || self.verification_ttl_secs > MAX_VERIFICATION_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.verification_ttl_secs must be {}-{}, got {}",
                MIN_VERIFICATION_TTL_SECS, MAX_VERIFICATION_TTL_SECS, self.verification_ttl_secs
            )));
        }

        if !(self.site_url.starts_with("http://") || self.site_url.starts_with("https://")) {
            return Err(ConfigError::auth(format!(
                "auth.site_url must start with http:// or https://, got '{}'",
                self.site_url
            )));
        }

        Ok(())
    }

    /// Site URL without a trailing slash, ready for path concatenation
    pub fn site_base(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }
}
