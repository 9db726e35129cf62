mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod provisioning_config;
mod rate_limit_config;
mod server_config;
mod session_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provisioning_config::ProvisioningConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "FT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ft";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "fintracker.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 3600;
const MIN_ACCESS_TOKEN_TTL_SECS: u64 = 60;
const MAX_ACCESS_TOKEN_TTL_SECS: u64 = 86_400;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 30 * 86_400;
const MAX_REFRESH_TOKEN_TTL_SECS: u64 = 90 * 86_400;
const DEFAULT_REFRESH_LEEWAY_SECS: u64 = 300;
const DEFAULT_VERIFICATION_TTL_SECS: u64 = 86_400;
const MIN_VERIFICATION_TTL_SECS: u64 = 300;
const MAX_VERIFICATION_TTL_SECS: u64 = 7 * 86_400;
const DEFAULT_SECURE_COOKIES: bool = false;
const DEFAULT_REQUIRE_EMAIL_CONFIRMATION: bool = true;
const DEFAULT_SITE_URL: &str = "http://localhost:8000";

const DEFAULT_PROFILE_CACHE_TTL_SECS: u64 = 60;
const MAX_PROFILE_CACHE_TTL_SECS: u64 = 3600;
const DEFAULT_PROFILE_CACHE_CAPACITY: usize = 10_000;
const MIN_PROFILE_CACHE_CAPACITY: usize = 1;
const MAX_PROFILE_CACHE_CAPACITY: usize = 1_000_000;

const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 5;
const MIN_LOGIN_MAX_ATTEMPTS: u32 = 1;
const MAX_LOGIN_MAX_ATTEMPTS: u32 = 1000;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;
const MIN_LOGIN_WINDOW_SECS: u64 = 1;
const MAX_LOGIN_WINDOW_SECS: u64 = 3600;

const DEFAULT_PROVISIONING_MAX_ATTEMPTS: u32 = 3;
const MIN_PROVISIONING_MAX_ATTEMPTS: u32 = 1;
const MAX_PROVISIONING_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_PROVISIONING_INITIAL_DELAY_MS: u64 = 50;
const MIN_PROVISIONING_INITIAL_DELAY_MS: u64 = 1;
const MAX_PROVISIONING_INITIAL_DELAY_MS: u64 = 5000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
