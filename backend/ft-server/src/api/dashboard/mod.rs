#[allow(clippy::module_inception)]
pub mod dashboard;
pub mod dashboard_page;
pub mod member_dto;
pub mod members;
pub mod settings;
pub mod settings_response;
pub mod update_household_request;
pub mod update_preferences_request;
pub mod update_profile_request;
pub mod update_theme_request;
