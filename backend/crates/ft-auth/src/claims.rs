use crate::{AuthError, Result as AuthErrorResult};

use ft_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_EMAIL_CLAIM_LENGTH: usize = 254;

/// Access-token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    pub email: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    pub fn for_identity(identity: &Identity, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            exp: issued_at + ttl_secs,
            iat: issued_at,
        }
    }

    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub must be an identity id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() || self.email.len() > MAX_EMAIL_CLAIM_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email is empty or too long".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// True when the token expires at or before `now + leeway_secs`
    pub fn expires_within(&self, now: i64, leeway_secs: i64) -> bool {
        self.exp <= now + leeway_secs
    }

    #[track_caller]
    pub fn identity(&self) -> AuthErrorResult<Identity> {
        let id = Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Identity::new(id, self.email.clone()))
    }
}
