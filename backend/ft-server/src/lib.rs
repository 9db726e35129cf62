pub mod api;
pub mod error;
pub mod gate;
pub mod health;
pub mod logger;
pub mod onboarding;
pub mod routes;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, Result as ApiResult};
pub use api::extractors::current_user::CurrentUser;
pub use error::{Result as ServerResult, ServerError};
pub use gate::{Decision, DenyReason, decide};
pub use onboarding::{OnboardingWizard, StepOutcome, StepSubmission, WizardError};
pub use session::resolver::{ResolvedSession, SessionResolver};
pub use state::AppState;

pub use crate::routes::build_router;
