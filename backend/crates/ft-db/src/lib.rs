pub mod connection;
pub mod error;
pub mod household_store;
pub mod provisioning;
pub mod repositories;
mod rows;

pub use connection::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use household_store::{HouseholdStore, SqliteHouseholdStore};
pub use provisioning::{NewAccount, ProvisionedAccount, provision_account};
pub use repositories::family_repository::FamilyRepository;
pub use repositories::identity_repository::{IdentityRecord, IdentityRepository};
pub use repositories::refresh_token_repository::RefreshTokenRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::verification_token_repository::{
    VerificationKind, VerificationTokenRepository,
};
