//! Settings editor. Every mutation drops the cached profile so the next
//! request sees the change.

use crate::api::dashboard::{
    settings_response::{SettingsOptions, SettingsResponse},
    update_household_request::UpdateHouseholdRequest,
    update_preferences_request::UpdatePreferencesRequest,
    update_profile_request::UpdateProfileRequest,
    update_theme_request::UpdateThemeRequest,
};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::state::AppState;

use ft_core::{Identity, ReportingPeriod, TenantScope, Theme, validation};
use ft_db::{FamilyRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use uuid::Uuid;

async fn load_settings(state: &AppState, identity: &Identity) -> ApiResult<SettingsResponse> {
    let profile = state
        .profiles
        .load(identity)
        .await
        .map_err(|e| ApiError::store("load_profile", identity.id, e))?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    let household = FamilyRepository::new(state.pool.clone())
        .find_for_scope(profile.scope())
        .await
        .map_err(|e| ApiError::store("find_family", identity.id, e))?
        .ok_or_else(|| ApiError::not_found("Household not found"))?;

    Ok(SettingsResponse {
        profile,
        household,
        options: SettingsOptions::default(),
    })
}

async fn refreshed(state: &AppState, identity: &Identity) -> ApiResult<Json<SettingsResponse>> {
    state.profiles.invalidate(identity.id).await;
    load_settings(state, identity).await.map(Json)
}

/// GET /dashboard/settings
pub async fn get_settings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<SettingsResponse>> {
    load_settings(&state, &user.identity).await.map(Json)
}

/// PUT /dashboard/settings/profile
pub async fn update_profile(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let first_name = validation::person_name("first_name", "First name", &req.first_name)?;
    let last_name = validation::person_name("last_name", "Last name", &req.last_name)?;
    let default_period = match req.default_period.as_deref() {
        Some(period) => period.trim().parse::<ReportingPeriod>()?,
        None => user.profile.default_period,
    };

    UserRepository::new(state.pool.clone())
        .update_profile(user.profile.id, &first_name, &last_name, default_period)
        .await
        .map_err(|e| ApiError::store("update_profile", user.profile.id, e))?;

    info!("User {} updated their profile", user.profile.id);
    refreshed(&state, &user.identity).await
}

/// PUT /dashboard/settings/household
pub async fn update_household(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdateHouseholdRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    rename(&state, &user, user.profile.family_id, &req.name).await
}

/// PUT /dashboard/settings/family/{family_id}
///
/// Same as the household update but names the household explicitly, so
/// the tenant check is what stands between the caller and someone else's
/// household.
pub async fn update_family(
    State(state): State<AppState>,
    Path(family_id): Path<Uuid>,
    user: CurrentUser,
    Json(req): Json<UpdateHouseholdRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    rename(&state, &user, family_id, &req.name).await
}

async fn rename(
    state: &AppState,
    user: &CurrentUser,
    family_id: Uuid,
    name: &str,
) -> ApiResult<Json<SettingsResponse>> {
    let name = validation::household_name(name)?;
    let scope = TenantScope::new(user.profile.id, family_id);

    FamilyRepository::new(state.pool.clone())
        .update_name(scope, &name)
        .await
        .map_err(|e| ApiError::store("update_household_name", user.profile.id, e))?;

    info!("User {} renamed household {}", user.profile.id, family_id);
    refreshed(state, &user.identity).await
}

/// PUT /dashboard/settings/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdatePreferencesRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let country = validation::country(&req.country)?;
    let currency = validation::currency(&req.currency)?;
    let date_format = validation::date_format(&req.date_format)?;

    FamilyRepository::new(state.pool.clone())
        .update_location(user.profile.scope(), country.code, &currency, &date_format)
        .await
        .map_err(|e| ApiError::store("update_preferences", user.profile.id, e))?;

    refreshed(&state, &user.identity).await
}

/// PUT /dashboard/settings/theme
pub async fn update_theme(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<UpdateThemeRequest>,
) -> ApiResult<Json<SettingsResponse>> {
    let theme: Theme = req.theme.trim().parse()?;

    UserRepository::new(state.pool.clone())
        .update_theme(user.profile.id, theme)
        .await
        .map_err(|e| ApiError::store("update_theme", user.profile.id, e))?;

    refreshed(&state, &user.identity).await
}
