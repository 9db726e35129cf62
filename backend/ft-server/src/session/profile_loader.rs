use crate::session::profile_cache::ProfileCache;

use ft_core::{Identity, Profile};
use ft_db::{Result as DbErrorResult, UserRepository};

use std::time::Duration;

use log::{debug, warn};
use sqlx::SqlitePool;
use tokio::time::sleep;
use uuid::Uuid;

/// Loads profiles through the cache. A profile that is missing for an
/// existing identity is re-read a bounded number of times with
/// exponential backoff before it is reported as missing.
pub struct ProfileLoader {
    users: UserRepository,
    cache: ProfileCache,
    max_attempts: u32,
    initial_delay: Duration,
}

impl ProfileLoader {
    pub fn new(
        pool: SqlitePool,
        cache: ProfileCache,
        max_attempts: u32,
        initial_delay: Duration,
    ) -> Self {
        Self {
            users: UserRepository::new(pool),
            cache,
            max_attempts: max_attempts.max(1),
            initial_delay,
        }
    }

    pub async fn load(&self, identity: &Identity) -> DbErrorResult<Option<Profile>> {
        if let Some(profile) = self.cache.get(identity.id).await {
            return Ok(Some(profile));
        }

        let generation = self.cache.generation();
        let mut delay = self.initial_delay;
        for attempt in 1..=self.max_attempts {
            if let Some(profile) = self.users.find_by_id(identity.id).await? {
                if attempt > 1 {
                    debug!(
                        "Profile for {} appeared after {} attempts",
                        identity.id, attempt
                    );
                }
                self.cache.insert(profile.clone(), generation).await;
                return Ok(Some(profile));
            }

            if attempt < self.max_attempts {
                // 0.5x to 1.5x jitter
                let jittered = delay.mul_f64(0.5 + rand::random::<f64>());
                debug!(
                    "Profile for {} missing (attempt {}), retrying in {:?}",
                    identity.id, attempt, jittered
                );
                sleep(jittered).await;
                delay = delay.saturating_mul(2);
            }
        }

        warn!(
            "Profile missing for identity {} ({}) after {} attempts",
            identity.id, identity.email, self.max_attempts
        );
        Ok(None)
    }

    pub async fn invalidate(&self, identity_id: Uuid) {
        self.cache.invalidate(identity_id).await;
    }

    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }
}
