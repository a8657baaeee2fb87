use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

// Exactly one '@', non-empty local and domain parts, no whitespace.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,
    #[error("Invalid email address")]
    Malformed,
}

/// A normalized (trimmed, lowercased) and syntactically valid email address.
///
/// Equality and hashing work on the normalized form, so the type can be used
/// directly as the account key.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_SHAPE.is_match(&normalized) {
            return Err(EmailError::Malformed);
        }
        Ok(Self(Secret::new(normalized)))
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        let email = self.0.expose_secret();
        email.split_once('@').map_or(email.as_str(), |(local, _)| local)
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value.expose_secret())
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
