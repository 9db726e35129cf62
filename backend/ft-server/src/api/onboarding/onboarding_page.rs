use ft_core::{Country, Currency, DateFormat, Family, OnboardingStep, Profile};

use serde::Serialize;

/// View-model for one wizard step
#[derive(Debug, Serialize)]
pub struct OnboardingPage {
    pub step: OnboardingStep,
    /// 1-based, shown as "step N of `total`"
    pub number: usize,
    pub total: usize,
    pub action: &'static str,
    pub back: Option<&'static str>,
    pub values: StepValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<&'static [Country]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<&'static [Currency]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_formats: Option<&'static [DateFormat]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<&'static str>>,
}

/// Current household and profile settings used to prefill the forms and
/// as the summary on the final step
#[derive(Debug, Serialize)]
pub struct StepValues {
    pub name: String,
    pub country: String,
    pub currency: String,
    pub date_format: String,
    pub theme: String,
}

impl StepValues {
    pub fn new(family: &Family, profile: &Profile) -> Self {
        Self {
            name: family.name.clone(),
            country: family.country.clone(),
            currency: family.currency.clone(),
            date_format: family.date_format.clone(),
            theme: profile.theme.as_str().to_string(),
        }
    }
}
