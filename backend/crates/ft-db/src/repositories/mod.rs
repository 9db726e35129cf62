pub mod family_repository;
pub mod identity_repository;
pub mod refresh_token_repository;
pub mod user_repository;
pub mod verification_token_repository;
