#[allow(clippy::module_inception)]
pub mod onboarding;
pub mod onboarding_form;
pub mod onboarding_page;
