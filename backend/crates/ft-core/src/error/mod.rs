use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid reporting period: {value} {location}")]
    InvalidReportingPeriod {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid onboarding step: {value} {location}")]
    InvalidOnboardingStep {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message safe to show to the end user (no location suffix)
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidRole { value, .. } => format!("Unknown role '{value}'"),
            Self::InvalidTheme { value, .. } => format!("Unknown theme '{value}'"),
            Self::InvalidReportingPeriod { value, .. } => {
                format!("Unknown reporting period '{value}'")
            }
            Self::InvalidOnboardingStep { value, .. } => {
                format!("Unknown onboarding step '{value}'")
            }
        }
    }

    /// Field name when the error is tied to a single input
    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => field.clone(),
            Self::InvalidRole { .. } => Some("role".to_string()),
            Self::InvalidTheme { .. } => Some("theme".to_string()),
            Self::InvalidReportingPeriod { .. } => Some("default_period".to_string()),
            Self::InvalidOnboardingStep { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
