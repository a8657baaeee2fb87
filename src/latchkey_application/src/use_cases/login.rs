use latchkey_core::{
    Account, AccountStore, AccountStoreError, AccountView, Email, EmailError, PasswordHasher,
};
use secrecy::Secret;

use crate::error::AuthError;

/// Login use case - verifies credentials against the stored hash
pub struct LoginUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> LoginUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            account_store,
            password_hasher,
        }
    }

    /// Execute the login use case
    ///
    /// A hash verification runs on every call. When no account matches the
    /// email, the password is checked against the hasher's decoy hash, so an
    /// unknown email costs as much as a wrong password and fails the same way.
    ///
    /// # Returns
    /// The account's view, `InvalidInput` for an empty email, or
    /// `InvalidCredentials`
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<AccountView, AuthError> {
        let account = match Email::try_from(email) {
            Ok(email) => self.find_account(&email).await?,
            Err(EmailError::Malformed) => None,
            Err(e) => return Err(e.into()),
        };

        let expected = account
            .as_ref()
            .map_or_else(|| self.password_hasher.decoy_hash(), Account::password_hash);
        let matches = self
            .password_hasher
            .verify_password(expected, &password)
            .await?;

        match account {
            Some(account) if matches => Ok(account.view()),
            _ => {
                tracing::debug!("Rejected login attempt");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn find_account(&self, email: &Email) -> Result<Option<Account>, AuthError> {
        match self.account_store.get_account(email).await {
            Ok(account) => Ok(Some(account)),
            Err(AccountStoreError::AccountNotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
