use std::fmt;

use crate::{domain::user::UserError, validation::is_valid_email};

/// A validated email address, always stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lowercases an email so that lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

impl TryFrom<&str> for Email {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !is_valid_email(value) {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(normalize_email(value)))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
