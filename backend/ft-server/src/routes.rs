use crate::api::{auth::auth, dashboard, onboarding::onboarding};
use crate::gate::middleware::enforce_access;
use crate::health;
use crate::state::AppState;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::StatusCode,
    middleware,
    routing::{get, post, put},
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/", get(dashboard::dashboard::root))
        // Credential pages and actions
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route(
            "/confirm-signup",
            get(auth::confirm_signup_page).post(auth::resend_confirmation),
        )
        .route("/auth/callback", get(auth::auth_callback))
        .route("/logout", post(auth::logout))
        // Onboarding wizard
        .route(
            "/onboarding/{step}",
            get(onboarding::get_step).post(onboarding::submit_step),
        )
        // Dashboard
        .route("/dashboard", get(dashboard::dashboard::dashboard))
        .route("/dashboard/settings", get(dashboard::settings::get_settings))
        .route(
            "/dashboard/settings/profile",
            put(dashboard::settings::update_profile),
        )
        .route(
            "/dashboard/settings/household",
            put(dashboard::settings::update_household),
        )
        .route(
            "/dashboard/settings/preferences",
            put(dashboard::settings::update_preferences),
        )
        .route(
            "/dashboard/settings/theme",
            put(dashboard::settings::update_theme),
        )
        .route(
            "/dashboard/settings/family/{family_id}",
            put(dashboard::settings::update_family),
        )
        .route(
            "/dashboard/admin/members",
            get(dashboard::members::list_members),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_access,
        ));

    let request_timeout = state.request_timeout;

    Router::new()
        // Health check endpoints (outside the access gate)
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .merge(gated)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|_: BoxError| async {
                    StatusCode::REQUEST_TIMEOUT
                }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
