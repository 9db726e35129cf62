pub mod auth;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod onboarding;
pub mod page_query;
