use std::sync::Arc;

use latchkey_core::{AccountStore, PasswordHasher};

use crate::config::ServiceSetting;

/// State shared by every route.
///
/// The account store is a cheap handle (clones share one map); the hasher and
/// service metadata are behind `Arc`s.
pub struct AuthState<S, H> {
    pub account_store: S,
    pub password_hasher: Arc<H>,
    pub service: Arc<ServiceSetting>,
}

impl<S, H> AuthState<S, H>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + 'static,
{
    pub fn new(account_store: S, password_hasher: H, service: ServiceSetting) -> Self {
        Self {
            account_store,
            password_hasher: Arc::new(password_hasher),
            service: Arc::new(service),
        }
    }
}

impl<S: Clone, H> Clone for AuthState<S, H> {
    fn clone(&self) -> Self {
        Self {
            account_store: self.account_store.clone(),
            password_hasher: Arc::clone(&self.password_hasher),
            service: Arc::clone(&self.service),
        }
    }
}
