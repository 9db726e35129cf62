use ft_auth::hash_password;
use ft_config::Config;
use ft_core::Theme;
use ft_db::{NewAccount, ProvisionedAccount, UserRepository, provision_account};
use ft_server::AppState;

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";
pub const PASSWORD: &str = "correct-horse-battery";

/// In-memory SQLite pool with foreign keys on and migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ft_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.require_email_confirmation = true;
    config.auth.site_url = "http://localhost:8000".to_string();
    config.provisioning.max_attempts = 1;
    config.provisioning.initial_delay_ms = 1;
    config
}

pub async fn create_test_state_with(config: Config) -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, &config, TEST_SECRET)
}

pub async fn create_test_state() -> AppState {
    create_test_state_with(test_config()).await
}

/// Confirmed account whose password is [`PASSWORD`]
pub async fn create_account(pool: &SqlitePool, email: &str) -> ProvisionedAccount {
    provision_account(
        pool,
        NewAccount {
            email: email.to_string(),
            password_hash: hash_password(PASSWORD).expect("Failed to hash password"),
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            email_confirmed: true,
        },
    )
    .await
    .expect("Failed to provision account")
}

/// Records the wizard theme and completes onboarding
pub async fn mark_onboarded(pool: &SqlitePool, user_id: Uuid) {
    let users = UserRepository::new(pool.clone());
    users
        .set_onboarding_theme(user_id, Theme::System, Utc::now())
        .await
        .expect("Failed to set onboarding theme");
    users
        .mark_onboarded(user_id, Utc::now())
        .await
        .expect("Failed to mark onboarded");
}

pub async fn onboarded_at(pool: &SqlitePool, user_id: Uuid) -> Option<i64> {
    sqlx::query_scalar("SELECT onboarded_at FROM users WHERE id = ?")
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await
        .expect("No user row")
}

/// Second member of an existing household with the given role
pub async fn add_member(pool: &SqlitePool, family_id: Uuid, email: &str, role: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now().timestamp();
    let password_hash = hash_password(PASSWORD).expect("Failed to hash password");

    sqlx::query(
        "INSERT INTO auth_identities (id, email, password_hash, email_confirmed_at, created_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert identity");

    sqlx::query(
        "INSERT INTO users (id, email, first_name, last_name, role, family_id, onboarded_at, created_at, updated_at) \
         VALUES (?, ?, 'Robin', 'Rivera', ?, ?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(email)
    .bind(role)
    .bind(family_id.to_string())
    .bind(now)
    .bind(now + 1)
    .bind(now + 1)
    .execute(pool)
    .await
    .expect("Failed to insert member");

    id
}

pub async fn latest_verification_token(pool: &SqlitePool, identity_id: Uuid) -> String {
    sqlx::query_scalar(
        "SELECT token_hash FROM auth_verification_tokens \
         WHERE identity_id = ? AND consumed_at IS NULL \
         ORDER BY created_at DESC LIMIT 1",
    )
    .bind(identity_id.to_string())
    .fetch_one(pool)
    .await
    .expect("No verification token")
}

pub async fn identity_id_for(pool: &SqlitePool, email: &str) -> Uuid {
    let id: String = sqlx::query_scalar("SELECT id FROM auth_identities WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("No identity for email");
    Uuid::parse_str(&id).expect("Invalid identity id")
}
