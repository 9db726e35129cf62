use crate::session::profile_cache::ProfileCache;
use crate::session::profile_loader::ProfileLoader;
use crate::session::resolver::SessionResolver;

use ft_auth::LoginRateLimiter;
use ft_config::{AuthConfig, Config};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<SessionResolver>,
    pub profiles: Arc<ProfileLoader>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub auth: Arc<AuthConfig>,
    pub request_timeout: Duration,
}

impl AppState {
    /// `secret` is the resolved signing secret (configured or generated)
    pub fn new(pool: SqlitePool, config: &Config, secret: &[u8]) -> Self {
        let cache = ProfileCache::new(
            Duration::from_secs(config.session.profile_cache_ttl_secs),
            config.session.profile_cache_capacity,
        );
        let profiles = ProfileLoader::new(
            pool.clone(),
            cache,
            config.provisioning.max_attempts,
            Duration::from_millis(config.provisioning.initial_delay_ms),
        );

        Self {
            sessions: Arc::new(SessionResolver::new(pool.clone(), secret, &config.auth)),
            profiles: Arc::new(profiles),
            login_limiter: Arc::new(LoginRateLimiter::new(
                config.rate_limit.login_max_attempts,
                config.rate_limit.login_window_secs,
            )),
            auth: Arc::new(config.auth.clone()),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            pool,
        }
    }
}
