#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_page;
pub mod callback_query;
pub mod login_request;
pub mod register_request;
pub mod resend_request;
pub mod verification;
