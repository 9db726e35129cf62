#![allow(dead_code)]

use ft_db::{NewAccount, ProvisionedAccount, provision_account};

use sqlx::SqlitePool;

pub fn new_account(email: &str, first_name: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        first_name: first_name.to_string(),
        last_name: "Rivera".to_string(),
        email_confirmed: true,
    }
}

/// Provisions an account and panics on failure
pub async fn provisioned(pool: &SqlitePool, email: &str, first_name: &str) -> ProvisionedAccount {
    provision_account(pool, new_account(email, first_name))
        .await
        .expect("Failed to provision test account")
}

/// Adds a second member to an existing household
pub async fn add_member(pool: &SqlitePool, family_id: uuid::Uuid, email: &str) -> uuid::Uuid {
    let id = uuid::Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO auth_identities (id, email, password_hash, email_confirmed_at, created_at) \
         VALUES (?, ?, 'x', ?, ?)",
    )
    .bind(id.to_string())
    .bind(email)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to insert identity");

    sqlx::query(
        "INSERT INTO users (id, email, first_name, last_name, role, family_id, created_at, updated_at) \
         VALUES (?, ?, 'Robin', 'Rivera', 'member', ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(email)
    .bind(family_id.to_string())
    .bind(now + 1)
    .bind(now + 1)
    .execute(pool)
    .await
    .expect("Failed to insert member");

    id
}
