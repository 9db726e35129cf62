//! Request-level enforcement of the access gate.

use crate::gate::{Decision, decide, needs_profile};
use crate::session::cookies;
use crate::session::request_session::RequestSession;
use crate::state::AppState;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use log::debug;

/// Resolve the session, decide access, then either run the handler or
/// redirect. Cookie writes from resolution are attached to whichever
/// response is produced.
pub async fn enforce_access(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let resolved = state.sessions.resolve(request.headers()).await;
    cookies::rewrite_request_cookies(request.headers_mut(), &resolved.cookies);

    let session = RequestSession::new(resolved.identity, state.profiles.clone());

    let profile = if needs_profile(&path) {
        session.profile().await
    } else {
        None
    };
    let decision = decide(&path, session.identity(), profile);

    let mut response = match decision {
        Decision::Allow => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Decision::Redirect { to, reason } => {
            debug!("Redirecting {} to {} ({})", path, to, reason.as_str());
            Redirect::to(to).into_response()
        }
    };

    cookies::append_set_cookies(response.headers_mut(), &resolved.cookies);
    response
}
