//! Axum extractor for the signed-in user

use crate::api::error::ApiError;
use crate::session::request_session::RequestSession;
use crate::state::AppState;

use ft_core::{Identity, Profile};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The authenticated identity and its loaded profile.
///
/// Reads the [`RequestSession`] the access middleware stored in the
/// request extensions, so the profile is never loaded twice per request.
pub struct CurrentUser {
    pub identity: Identity,
    pub profile: Profile,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(session) = parts.extensions.get::<RequestSession>().cloned() else {
                log::warn!("No session on request to {}", parts.uri.path());
                return Err(ApiError::unauthorized("Please sign in"));
            };

            let Some(identity) = session.identity().cloned() else {
                return Err(ApiError::unauthorized("Please sign in"));
            };

            match session.profile().await {
                Some(profile) => Ok(CurrentUser {
                    identity,
                    profile: profile.clone(),
                }),
                None => Err(ApiError::unauthorized("Your profile could not be loaded")),
            }
        }
    }
}
