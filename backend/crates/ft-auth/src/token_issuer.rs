use crate::{AuthError, Claims, Result as AuthErrorResult};

use ft_core::Identity;

use std::fmt::Write as _;
use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rand::RngCore;

const OPAQUE_TOKEN_BYTES: usize = 32;

/// A signed access token and its expiry (Unix seconds)
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: i64,
}

/// Signs HS256 access tokens for authenticated identities
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    access_ttl_secs: i64,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], access_ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            access_ttl_secs: i64::try_from(access_ttl_secs).unwrap_or(i64::MAX),
        }
    }

    #[track_caller]
    pub fn issue_access(&self, identity: &Identity) -> AuthErrorResult<AccessToken> {
        let claims = Claims::for_identity(identity, Utc::now().timestamp(), self.access_ttl_secs);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(AccessToken {
            token,
            expires_at: claims.exp,
        })
    }

    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl_secs
    }
}

/// 256 random bits, hex encoded. Used for refresh and verification tokens.
pub fn generate_opaque_token() -> String {
    let mut bytes = [0u8; OPAQUE_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    bytes.iter().fold(
        String::with_capacity(OPAQUE_TOKEN_BYTES * 2),
        |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}

/// Signing secret for deployments that configure none
pub fn generate_secret() -> String {
    generate_opaque_token()
}
