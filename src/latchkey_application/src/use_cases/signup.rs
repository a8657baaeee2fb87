use latchkey_core::{
    AccountStore, AccountView, DisplayName, Email, NewAccount, Password, PasswordHasher,
};
use secrecy::Secret;

use crate::error::AuthError;

/// Signup use case - handles account registration
pub struct SignupUseCase<'a, S, H>
where
    S: AccountStore,
    H: PasswordHasher,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> SignupUseCase<'a, S, H>
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

    /// Execute the signup use case
    ///
    /// # Arguments
    /// * `email` - Raw email, normalized here
    /// * `password` - Plaintext password, at least `Password::MIN_LENGTH` characters
    /// * `display_name` - Optional name, defaults to the email's local part
    ///
    /// # Returns
    /// The new account's view, or `InvalidInput`, `InvalidEmail`,
    /// `WeakPassword` or `AlreadyExists`
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
        display_name: Option<String>,
    ) -> Result<AccountView, AuthError> {
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;
        let display_name = DisplayName::resolve(display_name, &email);

        // Hash before touching the store so no lock is held across the hash
        let password_hash = self.password_hasher.hash_password(&password).await?;

        let account = self
            .account_store
            .add_account(NewAccount::new(email, display_name, password_hash))
            .await?;

        tracing::info!("Account registered");
        Ok(account.view())
    }
}
