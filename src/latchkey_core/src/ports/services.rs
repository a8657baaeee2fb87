use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{password::Password, password_hash::PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),
}

/// Salted one-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt.
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// `Ok(false)` on mismatch. Errors are reserved for hashes the hasher
    /// cannot read or internal failures.
    async fn verify_password(
        &self,
        expected: &PasswordHash,
        candidate: &Secret<String>,
    ) -> Result<bool, PasswordHasherError>;

    /// A valid hash of an unknown secret. Verifying against it costs the same
    /// as verifying against a real account's hash.
    fn decoy_hash(&self) -> &PasswordHash;
}
