use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use latchkey_core::{Account, AccountStore, AccountStoreError, Email, NewAccount};

#[derive(Default)]
struct Accounts {
    by_email: HashMap<Email, Account>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Accounts {
    // Never earlier than the previous stamp, even if the wall clock steps back.
    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(stamp);
        stamp
    }
}

/// Process-lifetime in-memory account store.
///
/// Clones share the same map. Inserts happen under the write lock with no
/// await point between the existence check and the insert.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_email.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.by_email.is_empty()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn contains_account(&self, email: &Email) -> Result<bool, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_email.contains_key(email))
    }

    #[tracing::instrument(name = "Adding account to HashMap store", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.by_email.contains_key(account.email()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        let created_at = accounts.next_created_at();
        let account = account.into_account(created_at);
        accounts
            .by_email
            .insert(account.email().clone(), account.clone());
        Ok(account)
    }

    async fn get_account(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .by_email
            .get(email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }
}
