use crate::onboarding::StepSubmission;

use ft_core::OnboardingStep;

use serde::Deserialize;

/// Fields of every wizard form; each step reads only its own.
///
/// `step` is the hidden field naming the step the form was rendered for.
#[derive(Debug, Default, Deserialize)]
pub struct OnboardingForm {
    pub step: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub date_format: Option<String>,
    pub theme: Option<String>,
}

impl OnboardingForm {
    /// Missing fields become empty strings and fail validation downstream
    pub fn into_submission(self, step: OnboardingStep) -> StepSubmission {
        match step {
            OnboardingStep::Household => StepSubmission::Household {
                name: self.name.unwrap_or_default(),
            },
            OnboardingStep::Location => StepSubmission::Location {
                country: self.country.unwrap_or_default(),
            },
            OnboardingStep::Preferences => StepSubmission::Preferences {
                currency: self.currency.unwrap_or_default(),
                date_format: self.date_format.unwrap_or_default(),
            },
            OnboardingStep::Theme => StepSubmission::Theme {
                theme: self.theme.unwrap_or_default(),
            },
            OnboardingStep::Complete => StepSubmission::Complete,
        }
    }
}
