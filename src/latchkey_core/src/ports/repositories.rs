use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Authoritative email → account mapping.
///
/// Implementations must make `add_account` an atomic check-and-insert: of any
/// number of concurrent calls for the same email, exactly one succeeds. The
/// store assigns `created_at` inside that critical section and never assigns a
/// timestamp earlier than one it has already handed out.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn contains_account(&self, email: &Email) -> Result<bool, AccountStoreError>;
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
    async fn get_account(&self, email: &Email) -> Result<Account, AccountStoreError>;
}
