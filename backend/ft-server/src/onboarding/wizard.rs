//! The five-step onboarding wizard.
//!
//! Each step validates its input, writes it through a [`HouseholdStore`]
//! and only then advances. A failed validation or write leaves the wizard
//! on the same step, and going back never writes. Saved progress decides
//! which steps a member may submit.

use ft_core::{CoreError, OnboardingStep, TenantScope, Theme, validation};
use ft_db::{DbError, HouseholdStore};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use thiserror::Error;

/// Input submitted for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSubmission {
    Household { name: String },
    Location { country: String },
    Preferences { currency: String, date_format: String },
    Theme { theme: String },
    Complete,
}

impl StepSubmission {
    pub fn step(&self) -> OnboardingStep {
        match self {
            Self::Household { .. } => OnboardingStep::Household,
            Self::Location { .. } => OnboardingStep::Location,
            Self::Preferences { .. } => OnboardingStep::Preferences,
            Self::Theme { .. } => OnboardingStep::Theme,
            Self::Complete => OnboardingStep::Complete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(OnboardingStep),
    /// `first_time` is false when another request finished onboarding first
    Completed { first_time: bool },
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Submitted step '{submitted}' while on step '{expected}' {location}")]
    StepMismatch {
        expected: OnboardingStep,
        submitted: OnboardingStep,
        location: ErrorLocation,
    },

    #[error("Failed to save onboarding step: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<CoreError> for WizardError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::Validation {
            message: e.user_message(),
            field: e.field(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for WizardError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingWizard {
    current: OnboardingStep,
    /// Furthest step the member may submit; later steps are refused
    reached: OnboardingStep,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::at(OnboardingStep::FIRST)
    }
}

impl OnboardingWizard {
    /// Wizard whose saved progress and current step are both `step`
    pub fn at(step: OnboardingStep) -> Self {
        Self {
            current: step,
            reached: step,
        }
    }

    /// Reopen the wizard on `requested` for a member whose saved progress is
    /// `reached`. Earlier steps may be revisited, later ones may not.
    #[track_caller]
    pub fn resume(
        reached: OnboardingStep,
        requested: OnboardingStep,
    ) -> Result<Self, WizardError> {
        if requested > reached {
            return Err(WizardError::StepMismatch {
                expected: reached,
                submitted: requested,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            current: requested,
            reached,
        })
    }

    pub fn current(&self) -> OnboardingStep {
        self.current
    }

    pub fn reached(&self) -> OnboardingStep {
        self.reached
    }

    /// Step one back; the first step has nowhere to go
    pub fn back(&mut self) -> Option<OnboardingStep> {
        let previous = self.current.previous()?;
        self.current = previous;
        Some(previous)
    }

    pub async fn submit(
        &mut self,
        store: &dyn HouseholdStore,
        scope: TenantScope,
        submission: StepSubmission,
    ) -> Result<StepOutcome, WizardError> {
        let submitted = submission.step();
        if submitted != self.current {
            return Err(WizardError::StepMismatch {
                expected: self.current,
                submitted,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match submission {
            StepSubmission::Household { name } => {
                let name = validation::household_name(&name)?;
                store.rename_household(scope, &name).await?;
            }
            StepSubmission::Location { country } => {
                let country = validation::country(&country)?;
                // choosing a country resets currency and date format to its defaults
                store
                    .set_location(scope, country.code, country.currency, country.date_format)
                    .await?;
            }
            StepSubmission::Preferences {
                currency,
                date_format,
            } => {
                let currency = validation::currency(&currency)?;
                let date_format = validation::date_format(&date_format)?;
                store.set_preferences(scope, &currency, &date_format).await?;
            }
            StepSubmission::Theme { theme } => {
                let theme: Theme = theme.trim().parse()?;
                store.set_onboarding_theme(scope, theme).await?;
            }
            StepSubmission::Complete => {
                let first_time = store.mark_onboarded(scope).await?;
                if first_time {
                    info!("User {} completed onboarding", scope.user_id);
                } else {
                    debug!("User {} was already onboarded", scope.user_id);
                }
                self.reached = OnboardingStep::Complete;
                return Ok(StepOutcome::Completed { first_time });
            }
        }

        // only Complete has no successor, and it returned above
        let next = self.current.next().unwrap_or(OnboardingStep::Complete);
        if next > self.reached {
            if !store.advance_onboarding(scope, self.reached, next).await? {
                debug!(
                    "Onboarding progress for {} already moved past {}",
                    scope.user_id, self.reached
                );
            }
            self.reached = next;
        }

        debug!(
            "User {} finished onboarding step {} -> {}",
            scope.user_id, submitted, next
        );
        self.current = next;
        Ok(StepOutcome::Advanced(next))
    }
}
