pub mod catalog;
pub mod family;
pub mod identity;
pub mod onboarding_step;
pub mod profile;
pub mod reporting_period;
pub mod role;
pub mod tenant_scope;
pub mod theme;
