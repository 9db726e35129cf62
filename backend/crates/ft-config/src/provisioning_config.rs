use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PROVISIONING_INITIAL_DELAY_MS,
    DEFAULT_PROVISIONING_MAX_ATTEMPTS, MAX_PROVISIONING_INITIAL_DELAY_MS,
    MAX_PROVISIONING_MAX_ATTEMPTS, MIN_PROVISIONING_INITIAL_DELAY_MS,
    MIN_PROVISIONING_MAX_ATTEMPTS,
};

use serde::Deserialize;

/// Bounded re-reads of a profile row that is missing for an existing identity.
///
/// Provisioning is transactional, so a missing row normally means it will
/// never appear; the retries only absorb replication or WAL visibility lag.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    /// Total reads, including the first
    pub max_attempts: u32,
    /// Doubles after each miss
    pub initial_delay_ms: u64,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_PROVISIONING_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_PROVISIONING_INITIAL_DELAY_MS,
        }
    }
}

impl ProvisioningConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_attempts < MIN_PROVISIONING_MAX_ATTEMPTS
            || self.max_attempts > MAX_PROVISIONING_MAX_ATTEMPTS
        {
            return Err(ConfigError::provisioning(format!(
                "provisioning.max_attempts must be {}-{}, got {}",
                MIN_PROVISIONING_MAX_ATTEMPTS, MAX_PROVISIONING_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        if self.initial_delay_ms < MIN_PROVISIONING_INITIAL_DELAY_MS
            || self.initial_delay_ms > MAX_PROVISIONING_INITIAL_DELAY_MS
        {
            return Err(ConfigError::provisioning(format!(
                "provisioning.initial_delay_ms must be {}-{}, got {}",
                MIN_PROVISIONING_INITIAL_DELAY_MS,
                MAX_PROVISIONING_INITIAL_DELAY_MS,
                self.initial_delay_ms
            )));
        }

        Ok(())
    }
}
