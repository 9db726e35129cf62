pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::catalog::{COUNTRIES, CURRENCIES, Country, Currency, DATE_FORMATS, DateFormat};
pub use models::family::Family;
pub use models::identity::Identity;
pub use models::onboarding_step::{ONBOARDING_PREFIX, OnboardingStep};
pub use models::profile::Profile;
pub use models::reporting_period::ReportingPeriod;
pub use models::role::Role;
pub use models::tenant_scope::TenantScope;
pub use models::theme::Theme;

#[cfg(test)]
mod tests;
