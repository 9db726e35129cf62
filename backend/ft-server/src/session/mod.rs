pub mod cookies;
pub mod profile_cache;
pub mod profile_loader;
pub mod request_session;
pub mod resolver;
