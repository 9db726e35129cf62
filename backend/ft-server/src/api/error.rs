//! REST API error types
//!
//! Every variant maps to one HTTP status and a JSON body of the form
//! `{"error": {"code", "message", "field"}}`. Internal failures are logged
//! with their detail and reach the client only as a generic message.

use crate::onboarding::WizardError;

use ft_auth::AuthError;
use ft_core::CoreError;
use ft_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Set when the error belongs to one form field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected input (422)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not allowed, including cross-household writes
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// `message` is logged only
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert a store failure, logging which operation failed for whom
    #[track_caller]
    pub fn store(operation: &str, user_id: Uuid, e: DbError) -> Self {
        log::error!("{} failed for user {}: {}", operation, user_id, e);
        Self::from(e)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Conflict { code, .. } => *code,
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            Self::Validation { message, field, .. } | Self::Conflict { message, field, .. } => {
                ApiErrorBody {
                    code,
                    message,
                    field,
                }
            }
            Self::Internal { .. } => ApiErrorBody {
                code,
                message: INTERNAL_MESSAGE.to_string(),
                field: None,
            },
            Self::NotFound { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::RateLimited { message, .. }
            | Self::BadRequest { message, .. } => ApiErrorBody {
                code,
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::TenantMismatch { .. } => ApiError::Forbidden {
                message: "You do not have access to this household".to_string(),
                location,
            },
            DbError::DuplicateEmail { .. } => ApiError::Conflict {
                code: "EMAIL_TAKEN",
                message: "An account with this email already exists".to_string(),
                field: Some("email".to_string()),
                location,
            },
            DbError::NotFound { entity, .. } => ApiError::NotFound {
                message: format!("{entity} not found"),
                location,
            },
            DbError::OnboardingIncomplete { .. } => ApiError::Conflict {
                code: "ONBOARDING_INCOMPLETE",
                message: "Finish the earlier onboarding steps first".to_string(),
                field: None,
                location,
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.user_message(),
            field: e.field(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::RateLimitExceeded { window_secs, .. } => ApiError::RateLimited {
                message: format!("Too many login attempts. Try again in {window_secs} seconds."),
                location,
            },
            AuthError::InvalidToken { .. }
            | AuthError::TokenExpired { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ApiError::Unauthorized {
                message: "Your session is no longer valid. Please sign in again.".to_string(),
                location,
            },
            AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. } => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

impl From<WizardError> for ApiError {
    #[track_caller]
    fn from(e: WizardError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            WizardError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            WizardError::StepMismatch {
                expected,
                submitted,
                ..
            } => ApiError::Conflict {
                code: "STEP_MISMATCH",
                message: format!(
                    "Step '{submitted}' was submitted but '{expected}' is the current step"
                ),
                field: None,
                location,
            },
            WizardError::Persistence { source, .. } => ApiError::from(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
