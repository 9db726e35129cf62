//! The five ordered steps of the onboarding wizard.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const ONBOARDING_PREFIX: &str = "/onboarding";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Household,
    Location,
    Preferences,
    Theme,
    Complete,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::Household,
        OnboardingStep::Location,
        OnboardingStep::Preferences,
        OnboardingStep::Theme,
        OnboardingStep::Complete,
    ];

    /// Entry point of the wizard; the only step a non-onboarded user is sent to
    pub const FIRST: OnboardingStep = OnboardingStep::Household;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Household => "household",
            Self::Location => "location",
            Self::Preferences => "preferences",
            Self::Theme => "theme",
            Self::Complete => "complete",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Household => "/onboarding/household",
            Self::Location => "/onboarding/location",
            Self::Preferences => "/onboarding/preferences",
            Self::Theme => "/onboarding/theme",
            Self::Complete => "/onboarding/complete",
        }
    }

    /// 1-based position shown as "step N of 5"
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|step| step == self)
            .map(|index| index + 1)
            .unwrap_or(1)
    }

    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        match self.number() {
            1 => None,
            n => Self::ALL.get(n - 2).copied(),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl FromStr for OnboardingStep {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "household" => Ok(Self::Household),
            "location" => Ok(Self::Location),
            "preferences" => Ok(Self::Preferences),
            "theme" => Ok(Self::Theme),
            "complete" => Ok(Self::Complete),
            _ => Err(CoreError::InvalidOnboardingStep {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
