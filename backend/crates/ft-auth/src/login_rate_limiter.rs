use crate::{AuthError, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Password attempts per email address. Keys are normalized to lower case.
pub struct LoginRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    max_attempts: u32,
    window_secs: u64,
}

impl LoginRateLimiter {
    pub fn new(max_attempts: u32, window_secs: u64) -> Self {
        let burst = NonZeroU32::new(max_attempts).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(window_secs.max(1));
        // one attempt replenishes every window/max_attempts
        let period = window / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            max_attempts: burst.get(),
            window_secs: window.as_secs(),
        }
    }

    #[track_caller]
    pub fn check(&self, email: &str) -> AuthErrorResult<()> {
        let key = email.trim().to_lowercase();
        self.limiter
            .check_key(&key)
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.max_attempts,
                window_secs: self.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop keys whose quota has fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }
}
