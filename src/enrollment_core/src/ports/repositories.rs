use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{user::User, user_id::UserId};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User with this email already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Storage for user records with a secondary index on normalized email.
///
/// Implementations must make the uniqueness check and the insert in
/// `add_user` a single atomic step.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;
    /// `email` must already be normalized.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError>;
    async fn clear(&self) -> Result<(), UserStoreError>;
}
