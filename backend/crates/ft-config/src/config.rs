use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ProvisioningConfig, RateLimitConfig,
    ServerConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub provisioning: ProvisioningConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. FT_CONFIG_DIR env var, else ./.ft/
    /// 2. Create the config directory if missing
    /// 3. config.toml if present, else defaults
    /// 4. FT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FT_CONFIG_DIR env var > ./.ft/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.session.validate()?;
        self.rate_limit.validate()?;
        self.provisioning.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: secret={}, access={}s, refresh={}s, leeway={}s, secure_cookies={}, confirm_email={}",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            },
            self.auth.access_token_ttl_secs,
            self.auth.refresh_token_ttl_secs,
            self.auth.refresh_leeway_secs,
            self.auth.secure_cookies,
            self.auth.require_email_confirmation
        );
        info!("  site_url: {}", self.auth.site_url);
        info!(
            "  session: profile_cache ttl={}s capacity={}",
            self.session.profile_cache_ttl_secs, self.session.profile_cache_capacity
        );
        info!(
            "  rate_limit: {} login attempts/{}s",
            self.rate_limit.login_max_attempts, self.rate_limit.login_window_secs
        );
        info!(
            "  provisioning: attempts={}, initial={}ms",
            self.provisioning.max_attempts, self.provisioning.initial_delay_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "FT_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("FT_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FT_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("FT_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "FT_AUTH_ACCESS_TOKEN_TTL_SECS",
            &mut self.auth.access_token_ttl_secs,
        );
        Self::apply_env_parse(
            "FT_AUTH_REFRESH_TOKEN_TTL_SECS",
            &mut self.auth.refresh_token_ttl_secs,
        );
        Self::apply_env_parse(
            "FT_AUTH_REFRESH_LEEWAY_SECS",
            &mut self.auth.refresh_leeway_secs,
        );
        Self::apply_env_parse(
            "FT_AUTH_VERIFICATION_TTL_SECS",
            &mut self.auth.verification_ttl_secs,
        );
        Self::apply_env_bool("FT_AUTH_SECURE_COOKIES", &mut self.auth.secure_cookies);
        Self::apply_env_bool(
            "FT_AUTH_REQUIRE_EMAIL_CONFIRMATION",
            &mut self.auth.require_email_confirmation,
        );
        Self::apply_env_string("FT_AUTH_SITE_URL", &mut self.auth.site_url);

        // Session
        Self::apply_env_parse(
            "FT_SESSION_PROFILE_CACHE_TTL_SECS",
            &mut self.session.profile_cache_ttl_secs,
        );
        Self::apply_env_parse(
            "FT_SESSION_PROFILE_CACHE_CAPACITY",
            &mut self.session.profile_cache_capacity,
        );

        // Rate limit
        Self::apply_env_parse(
            "FT_RATE_LIMIT_LOGIN_MAX_ATTEMPTS",
            &mut self.rate_limit.login_max_attempts,
        );
        Self::apply_env_parse(
            "FT_RATE_LIMIT_LOGIN_WINDOW_SECS",
            &mut self.rate_limit.login_window_secs,
        );

        // Provisioning
        Self::apply_env_parse(
            "FT_PROVISIONING_MAX_ATTEMPTS",
            &mut self.provisioning.max_attempts,
        );
        Self::apply_env_parse(
            "FT_PROVISIONING_INITIAL_DELAY_MS",
            &mut self.provisioning.initial_delay_ms,
        );

        // Logging
        Self::apply_env_parse("FT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FT_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("FT_LOG_DIR", &mut self.logging.dir);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
