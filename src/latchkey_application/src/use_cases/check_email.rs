use latchkey_core::{AccountStore, Email, EmailError};
use secrecy::Secret;

use crate::error::AuthError;

/// Check email use case - answers whether an account exists for an email
pub struct CheckEmailUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> CheckEmailUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the check email use case
    ///
    /// The email is normalized before lookup. A non-empty address that is not
    /// a valid email can never have been registered, so it reports `false`.
    ///
    /// # Returns
    /// Whether an account exists, or `AuthError::InvalidInput` for an empty email
    #[tracing::instrument(name = "CheckEmailUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Secret<String>) -> Result<bool, AuthError> {
        let email = match Email::try_from(email) {
            Ok(email) => email,
            Err(EmailError::Malformed) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        Ok(self.account_store.contains_account(&email).await?)
    }
}
