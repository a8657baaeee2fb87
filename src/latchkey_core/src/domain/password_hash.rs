use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    #[error("Password hash must not be empty")]
    Empty,
}

/// Output of a salted one-way password hash, in whatever encoding the hasher
/// uses (PHC string for Argon2). The salt travels inside the hash.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn parse(encoded: Secret<String>) -> Result<Self, PasswordHashError> {
        if encoded.expose_secret().is_empty() {
            return Err(PasswordHashError::Empty);
        }
        Ok(Self(encoded))
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
