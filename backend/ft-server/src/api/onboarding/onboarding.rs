//! HTTP surface of the onboarding wizard

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::onboarding::{
    onboarding_form::OnboardingForm,
    onboarding_page::{OnboardingPage, StepValues},
};
use crate::gate::access_gate::DASHBOARD_PATH;
use crate::onboarding::{OnboardingWizard, StepOutcome, WizardError};
use crate::state::AppState;

use ft_core::{COUNTRIES, CURRENCIES, DATE_FORMATS, OnboardingStep, Theme};
use ft_db::{FamilyRepository, SqliteHouseholdStore};

use axum::{
    Json,
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use log::error;

fn parse_step(step: &str) -> ApiResult<OnboardingStep> {
    step.parse()
        .map_err(|_| ApiError::not_found(format!("Unknown onboarding step '{step}'")))
}

/// GET /onboarding/{step}
///
/// A step beyond the member's saved progress redirects to the furthest
/// step they have reached.
pub async fn get_step(
    State(state): State<AppState>,
    Path(step): Path<String>,
    user: CurrentUser,
) -> ApiResult<Response> {
    let step = parse_step(&step)?;
    let profile = user.profile;

    if step > profile.onboarding_step {
        return Ok(Redirect::to(profile.onboarding_step.path()).into_response());
    }

    let family = FamilyRepository::new(state.pool.clone())
        .find_for_scope(profile.scope())
        .await
        .map_err(|e| ApiError::store("find_family", profile.id, e))?
        .ok_or_else(|| ApiError::not_found("Household not found"))?;

    let mut page = OnboardingPage {
        step,
        number: step.number(),
        total: OnboardingStep::ALL.len(),
        action: step.path(),
        back: step.previous().map(|previous| previous.path()),
        values: StepValues::new(&family, &profile),
        countries: None,
        currencies: None,
        date_formats: None,
        themes: None,
    };

    match step {
        OnboardingStep::Location => page.countries = Some(COUNTRIES),
        OnboardingStep::Preferences => {
            page.currencies = Some(CURRENCIES);
            page.date_formats = Some(DATE_FORMATS);
        }
        OnboardingStep::Theme => {
            page.themes = Some(Theme::ALL.iter().map(|theme| theme.as_str()).collect());
        }
        OnboardingStep::Household | OnboardingStep::Complete => {}
    }

    Ok(Json(page).into_response())
}

/// POST /onboarding/{step}
pub async fn submit_step(
    State(state): State<AppState>,
    Path(step): Path<String>,
    user: CurrentUser,
    Form(form): Form<OnboardingForm>,
) -> ApiResult<Response> {
    let step = parse_step(&step)?;
    let submitted = match form.step.as_deref() {
        Some(hidden) => hidden.trim().parse::<OnboardingStep>()?,
        None => step,
    };

    let profile = user.profile;
    let scope = profile.scope();
    let store = SqliteHouseholdStore::new(state.pool.clone());
    let mut wizard = OnboardingWizard::resume(profile.onboarding_step, step)?;

    let outcome = wizard
        .submit(&store, scope, form.into_submission(submitted))
        .await
        .map_err(|e| {
            if let WizardError::Persistence { source, .. } = &e {
                error!("onboarding_{} failed for user {}: {}", step, profile.id, source);
            }
            ApiError::from(e)
        })?;

    state.profiles.invalidate(profile.id).await;

    let destination = match outcome {
        StepOutcome::Advanced(next) => next.path(),
        StepOutcome::Completed { .. } => DASHBOARD_PATH,
    };
    Ok(Redirect::to(destination).into_response())
}
