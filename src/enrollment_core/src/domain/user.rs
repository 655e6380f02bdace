use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{email::Email, password::Password, user_id::UserId, user_name::UserName};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Name must be at least 2 characters")]
    InvalidName,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error(
        "Password must be at least 8 characters with uppercase, lowercase, number, and special character"
    )]
    WeakPassword,
}

/// A stored user record. Immutable once created.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    password: Password,
    created_at: DateTime<Utc>,
}

impl User {
    /// Builds a new record with a freshly generated id and the current time.
    pub fn new(name: UserName, email: Email, password: Password) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email,
            password,
            created_at: Utc::now(),
        }
    }

    /// Runs the field guards in order (name, email, password) and stops at
    /// the first failure.
    pub fn parse(name: &str, email: &str, password: Secret<String>) -> Result<Self, UserError> {
        let name = UserName::try_from(name)?;
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;

        Ok(Self::new(name, email, password))
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn password_matches(&self, candidate: &Secret<String>) -> bool {
        self.password.matches(candidate)
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary::from(self)
    }
}

/// The public projection of a user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}
