use secrecy::{ExposeSecret, Secret};

use crate::{domain::user::UserError, validation::is_valid_password};

/// A password that passed the strength rules.
///
/// Stored as given; only exact comparison is supported.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn matches(&self, candidate: &Secret<String>) -> bool {
        self.0.expose_secret() == candidate.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if !is_valid_password(value.expose_secret()) {
            return Err(UserError::WeakPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
