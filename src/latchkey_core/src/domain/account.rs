use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::{display_name::DisplayName, email::Email, password_hash::PasswordHash};

/// A registration that has been validated and hashed but not yet stored.
///
/// The store turns it into an [`Account`] when it assigns `created_at`.
#[derive(Debug, Clone)]
pub struct NewAccount {
    email: Email,
    display_name: DisplayName,
    password_hash: PasswordHash,
}

impl NewAccount {
    pub fn new(email: Email, display_name: DisplayName, password_hash: PasswordHash) -> Self {
        Self {
            email,
            display_name,
            password_hash,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn into_account(self, created_at: DateTime<Utc>) -> Account {
        Account {
            email: self.email,
            display_name: self.display_name,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

/// A registered user. Never mutated once created.
#[derive(Debug, Clone)]
pub struct Account {
    email: Email,
    display_name: DisplayName,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn view(&self) -> AccountView {
        AccountView {
            email: self.email.as_ref().expose_secret().clone(),
            display_name: self.display_name.to_string(),
            created_at: self.created_at,
        }
    }
}

/// The part of an [`Account`] that is safe to hand back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}
