use latchkey_core::{AccountStoreError, EmailError, PasswordError, PasswordHasherError};
use thiserror::Error;

/// Failures reported by the use cases.
///
/// Every variant except `Internal` is an expected, caller-recoverable
/// condition. Messages are stable and safe to show to end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },
    #[error("An account with this email already exists")]
    AlreadyExists,
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Broken invariant or failing collaborator; the detail is for logs only.
    #[error("Internal error")]
    Internal(String),
}

impl AuthError {
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::Internal(_))
    }
}

impl From<EmailError> for AuthError {
    fn from(error: EmailError) -> Self {
        match error {
            EmailError::Empty => AuthError::InvalidInput(error.to_string()),
            EmailError::Malformed => AuthError::InvalidEmail,
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(error: PasswordError) -> Self {
        match error {
            PasswordError::TooShort { min } => AuthError::WeakPassword { min },
        }
    }
}

impl From<AccountStoreError> for AuthError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists => AuthError::AlreadyExists,
            AccountStoreError::AccountNotFound => AuthError::InvalidCredentials,
            AccountStoreError::UnexpectedError(e) => AuthError::Internal(e),
        }
    }
}

impl From<PasswordHasherError> for AuthError {
    fn from(error: PasswordHasherError) -> Self {
        AuthError::Internal(error.to_string())
    }
}
