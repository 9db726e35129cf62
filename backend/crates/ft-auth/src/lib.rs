pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod password;
pub mod token_issuer;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{hash_password, verify_password};
pub use token_issuer::{AccessToken, TokenIssuer, generate_opaque_token, generate_secret};

#[cfg(test)]
mod tests;
