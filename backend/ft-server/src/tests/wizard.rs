use crate::onboarding::{OnboardingWizard, StepOutcome, StepSubmission, WizardError};

use ft_core::{OnboardingStep, TenantScope, Theme};
use ft_db::{DbError, HouseholdStore, Result as DbResult};

use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq)]
struct Household {
    name: Option<String>,
    country: Option<String>,
    currency: Option<String>,
    date_format: Option<String>,
    theme: Option<Theme>,
    onboarded: bool,
}

/// Records writes in memory; optionally fails every write.
/// Progress moves are tracked apart from the household writes.
#[derive(Default)]
struct MemoryStore {
    household: Mutex<Household>,
    writes: Mutex<usize>,
    progress: Mutex<Vec<(OnboardingStep, OnboardingStep)>>,
    fail: bool,
}

impl MemoryStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn snapshot(&self) -> Household {
        self.household.lock().unwrap().clone()
    }

    fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn progress_moves(&self) -> Vec<(OnboardingStep, OnboardingStep)> {
        self.progress.lock().unwrap().clone()
    }

    fn write(&self, apply: impl FnOnce(&mut Household)) -> DbResult<()> {
        *self.writes.lock().unwrap() += 1;
        if self.fail {
            return Err(DbError::Initialization {
                message: "store unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        apply(&mut self.household.lock().unwrap());
        Ok(())
    }
}

#[async_trait]
impl HouseholdStore for MemoryStore {
    async fn rename_household(&self, _scope: TenantScope, name: &str) -> DbResult<()> {
        self.write(|h| h.name = Some(name.to_string()))
    }

    async fn set_location(
        &self,
        _scope: TenantScope,
        country: &str,
        currency: &str,
        date_format: &str,
    ) -> DbResult<()> {
        self.write(|h| {
            h.country = Some(country.to_string());
            h.currency = Some(currency.to_string());
            h.date_format = Some(date_format.to_string());
        })
    }

    async fn set_preferences(
        &self,
        _scope: TenantScope,
        currency: &str,
        date_format: &str,
    ) -> DbResult<()> {
        self.write(|h| {
            h.currency = Some(currency.to_string());
            h.date_format = Some(date_format.to_string());
        })
    }

    async fn set_onboarding_theme(&self, _scope: TenantScope, theme: Theme) -> DbResult<()> {
        self.write(|h| h.theme = Some(theme))
    }

    async fn advance_onboarding(
        &self,
        _scope: TenantScope,
        from: OnboardingStep,
        to: OnboardingStep,
    ) -> DbResult<bool> {
        self.progress.lock().unwrap().push((from, to));
        Ok(true)
    }

    async fn mark_onboarded(&self, _scope: TenantScope) -> DbResult<bool> {
        let mut first_time = false;
        self.write(|h| {
            first_time = !h.onboarded;
            h.onboarded = true;
        })?;
        Ok(first_time)
    }
}

fn scope() -> TenantScope {
    TenantScope::new(Uuid::new_v4(), Uuid::new_v4())
}

#[tokio::test]
async fn test_full_wizard_walkthrough() {
    let store = MemoryStore::default();
    let scope = scope();
    let mut wizard = OnboardingWizard::default();

    let submissions = [
        StepSubmission::Household {
            name: "  Rivera Family ".to_string(),
        },
        StepSubmission::Location {
            country: "GB".to_string(),
        },
        StepSubmission::Preferences {
            currency: "EUR".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        },
        StepSubmission::Theme {
            theme: "dark".to_string(),
        },
    ];
    let expected_next = [
        OnboardingStep::Location,
        OnboardingStep::Preferences,
        OnboardingStep::Theme,
        OnboardingStep::Complete,
    ];

    for (submission, next) in submissions.into_iter().zip(expected_next) {
        let outcome = wizard.submit(&store, scope, submission).await.unwrap();
        assert_eq!(outcome, StepOutcome::Advanced(next));
        assert_eq!(wizard.current(), next);
    }

    let outcome = wizard
        .submit(&store, scope, StepSubmission::Complete)
        .await
        .unwrap();

    assert_eq!(outcome, StepOutcome::Completed { first_time: true });
    assert_eq!(
        store.progress_moves(),
        vec![
            (OnboardingStep::Household, OnboardingStep::Location),
            (OnboardingStep::Location, OnboardingStep::Preferences),
            (OnboardingStep::Preferences, OnboardingStep::Theme),
            (OnboardingStep::Theme, OnboardingStep::Complete),
        ]
    );
    assert_eq!(
        store.snapshot(),
        Household {
            name: Some("Rivera Family".to_string()),
            country: Some("GB".to_string()),
            currency: Some("EUR".to_string()),
            date_format: Some("%Y-%m-%d".to_string()),
            theme: Some(Theme::Dark),
            onboarded: true,
        }
    );
}

#[tokio::test]
async fn test_location_applies_country_defaults() {
    let store = MemoryStore::default();
    let mut wizard = OnboardingWizard::at(OnboardingStep::Location);

    wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Location {
                country: "DE".to_string(),
            },
        )
        .await
        .unwrap();

    let household = store.snapshot();
    assert_eq!(household.currency.as_deref(), Some("EUR"));
    assert_eq!(household.date_format.as_deref(), Some("%d.%m.%Y"));
}

#[tokio::test]
async fn test_short_household_name_rejected_without_write() {
    let store = MemoryStore::default();
    let mut wizard = OnboardingWizard::default();

    let result = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Household {
                name: "A".to_string(),
            },
        )
        .await;

    match result {
        Err(WizardError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(wizard.current(), OnboardingStep::Household);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_two_character_household_name_accepted() {
    let store = MemoryStore::default();
    let mut wizard = OnboardingWizard::default();

    let outcome = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Household {
                name: "AB".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome, StepOutcome::Advanced(OnboardingStep::Location));
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.snapshot().name.as_deref(), Some("AB"));
}

#[test]
fn test_resume_refuses_step_beyond_saved_progress() {
    let result = OnboardingWizard::resume(OnboardingStep::Household, OnboardingStep::Complete);

    assert!(matches!(
        result,
        Err(WizardError::StepMismatch {
            expected: OnboardingStep::Household,
            submitted: OnboardingStep::Complete,
            ..
        })
    ));
}

#[tokio::test]
async fn test_revisiting_earlier_step_keeps_saved_progress() {
    let store = MemoryStore::default();
    let mut wizard =
        OnboardingWizard::resume(OnboardingStep::Theme, OnboardingStep::Household).unwrap();

    let outcome = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Household {
                name: "Rivera Family".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome, StepOutcome::Advanced(OnboardingStep::Location));
    assert_eq!(wizard.reached(), OnboardingStep::Theme);
    assert!(store.progress_moves().is_empty());
}

#[tokio::test]
async fn test_unknown_country_rejected() {
    let store = MemoryStore::default();
    let mut wizard = OnboardingWizard::at(OnboardingStep::Location);

    let result = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Location {
                country: "ZZ".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(WizardError::Validation { .. })));
    assert_eq!(wizard.current(), OnboardingStep::Location);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_unknown_theme_rejected() {
    let store = MemoryStore::default();
    let mut wizard = OnboardingWizard::at(OnboardingStep::Theme);

    let result = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Theme {
                theme: "neon".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(WizardError::Validation { .. })));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_step_mismatch_rejected_without_write() {
    let store = MemoryStore::default();
    let mut wizard = OnboardingWizard::at(OnboardingStep::Preferences);

    let result = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Household {
                name: "Rivera Family".to_string(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(WizardError::StepMismatch {
            expected: OnboardingStep::Preferences,
            submitted: OnboardingStep::Household,
            ..
        })
    ));
    assert_eq!(wizard.current(), OnboardingStep::Preferences);
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_store_failure_keeps_current_step() {
    let store = MemoryStore::failing();
    let mut wizard = OnboardingWizard::default();

    let result = wizard
        .submit(
            &store,
            scope(),
            StepSubmission::Household {
                name: "Rivera Family".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(WizardError::Persistence { .. })));
    assert_eq!(wizard.current(), OnboardingStep::Household);
}

#[tokio::test]
async fn test_complete_is_idempotent() {
    let store = MemoryStore::default();
    let scope = scope();

    let first = OnboardingWizard::at(OnboardingStep::Complete)
        .submit(&store, scope, StepSubmission::Complete)
        .await
        .unwrap();
    let second = OnboardingWizard::at(OnboardingStep::Complete)
        .submit(&store, scope, StepSubmission::Complete)
        .await
        .unwrap();

    assert_eq!(first, StepOutcome::Completed { first_time: true });
    assert_eq!(second, StepOutcome::Completed { first_time: false });
    assert!(store.snapshot().onboarded);
}

#[test]
fn test_back_moves_one_step_and_stops_at_first() {
    let mut wizard = OnboardingWizard::at(OnboardingStep::Location);

    assert_eq!(wizard.back(), Some(OnboardingStep::Household));
    assert_eq!(wizard.back(), None);
    assert_eq!(wizard.current(), OnboardingStep::Household);
}
