//! In-memory doubles for the core ports, shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use latchkey_core::{
    Account, AccountStore, AccountStoreError, Email, NewAccount, Password, PasswordHash,
    PasswordHasher, PasswordHasherError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockAccountStore {
    pub accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn contains_account(&self, email: &Email) -> Result<bool, AccountStoreError> {
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        let account = account.into_account(Utc::now());
        accounts.insert(account.email().clone(), account.clone());
        Ok(account)
    }

    async fn get_account(&self, email: &Email) -> Result<Account, AccountStoreError> {
        self.accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }
}

/// Store whose every call fails, for the internal error path.
pub struct BrokenAccountStore;

#[async_trait::async_trait]
impl AccountStore for BrokenAccountStore {
    async fn contains_account(&self, _email: &Email) -> Result<bool, AccountStoreError> {
        Err(AccountStoreError::UnexpectedError("unavailable".into()))
    }

    async fn add_account(&self, _account: NewAccount) -> Result<Account, AccountStoreError> {
        Err(AccountStoreError::UnexpectedError("unavailable".into()))
    }

    async fn get_account(&self, _email: &Email) -> Result<Account, AccountStoreError> {
        Err(AccountStoreError::UnexpectedError("unavailable".into()))
    }
}

/// Reversible "hash" that is cheap and still never equals the plaintext.
pub struct FakeHasher {
    decoy: PasswordHash,
    pub verifications: AtomicUsize,
}

impl FakeHasher {
    pub fn new() -> Self {
        Self {
            decoy: PasswordHash::parse(Secret::new("fake$decoy".to_string())).unwrap(),
            verifications: AtomicUsize::new(0),
        }
    }

    pub fn verification_count(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }

    fn encode(plaintext: &str) -> String {
        format!("fake${}", plaintext.chars().rev().collect::<String>())
    }
}

#[async_trait::async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let encoded = Self::encode(password.as_ref().expose_secret());
        PasswordHash::parse(Secret::new(encoded))
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
    }

    async fn verify_password(
        &self,
        expected: &PasswordHash,
        candidate: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        Ok(expected.as_ref().expose_secret() == &Self::encode(candidate.expose_secret()))
    }

    fn decoy_hash(&self) -> &PasswordHash {
        &self.decoy
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_string())
}
