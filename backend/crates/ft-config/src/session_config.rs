use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROFILE_CACHE_CAPACITY, DEFAULT_PROFILE_CACHE_TTL_SECS,
    MAX_PROFILE_CACHE_CAPACITY, MAX_PROFILE_CACHE_TTL_SECS, MIN_PROFILE_CACHE_CAPACITY,
};

use serde::Deserialize;

/// Cross-request profile cache settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 0 disables caching (every request reads the store)
    pub profile_cache_ttl_secs: u64,
    pub profile_cache_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            profile_cache_ttl_secs: DEFAULT_PROFILE_CACHE_TTL_SECS,
            profile_cache_capacity: DEFAULT_PROFILE_CACHE_CAPACITY,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.profile_cache_ttl_secs > MAX_PROFILE_CACHE_TTL_SECS {
            return Err(ConfigError::session(format!(
                "session.profile_cache_ttl_secs must be 0-{}, got {}",
                MAX_PROFILE_CACHE_TTL_SECS, self.profile_cache_ttl_secs
            )));
        }

        if self.profile_cache_capacity < MIN_PROFILE_CACHE_CAPACITY
            || self.profile_cache_capacity > MAX_PROFILE_CACHE_CAPACITY
        {
            return Err(ConfigError::session(format!(
                "session.profile_cache_capacity must be {}-{}, got {}",
                MIN_PROFILE_CACHE_CAPACITY, MAX_PROFILE_CACHE_CAPACITY, self.profile_cache_capacity
            )));
        }

        Ok(())
    }
}
