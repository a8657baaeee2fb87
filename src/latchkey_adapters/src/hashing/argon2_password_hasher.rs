use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core::OsRng},
};
use latchkey_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSetting;

/// Argon2id hasher producing PHC strings with a per-call random salt.
///
/// Hashing and verification run on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
    decoy: PasswordHash,
}

impl Argon2PasswordHasher {
    pub fn new(setting: &HashingSetting) -> Result<Self, PasswordHasherError> {
        let params = Params::new(
            setting.memory_kib,
            setting.iterations,
            setting.parallelism,
            None,
        )
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?;

        // Hash of a random secret nobody knows
        let decoy_secret = SaltString::generate(&mut OsRng);
        let decoy = compute_password_hash(params.clone(), decoy_secret.as_str())
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?;

        Ok(Self {
            params,
            decoy: into_password_hash(decoy)?,
        })
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span = tracing::Span::current();
        let params = self.params.clone();
        let password = password.clone();

        let encoded = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                compute_password_hash(params, password.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))??;

        into_password_hash(encoded)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify_password(
        &self,
        expected: &PasswordHash,
        candidate: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        let current_span = tracing::Span::current();
        let params = self.params.clone();
        let expected = expected.as_ref().clone();
        let candidate = candidate.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                verify_password_hash(params, expected.expose_secret(), candidate.expose_secret())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::VerificationFailed(e.to_string()))?
    }

    fn decoy_hash(&self) -> &PasswordHash {
        &self.decoy
    }
}

fn build_argon2(params: Params) -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
}

fn compute_password_hash(
    params: Params,
    plaintext: &str,
) -> Result<Secret<String>, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    build_argon2(params)
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| Secret::new(hash.to_string()))
}

fn verify_password_hash(
    params: Params,
    expected: &str,
    candidate: &str,
) -> Result<bool, PasswordHasherError> {
    let expected =
        PhcHash::new(expected).map_err(|e| PasswordHasherError::VerificationFailed(e.to_string()))?;

    match build_argon2(params).verify_password(candidate.as_bytes(), &expected) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordHasherError::VerificationFailed(e.to_string())),
    }
}

fn into_password_hash(encoded: Secret<String>) -> Result<PasswordHash, PasswordHasherError> {
    PasswordHash::parse(encoded).map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
}
