use std::fmt;

use super::email::Email;

/// Name shown for an account. Falls back to the email's local part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn resolve(supplied: Option<String>, email: &Email) -> Self {
        match supplied.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self(email.local_part().to_string()),
        }
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
