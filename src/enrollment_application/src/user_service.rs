use enrollment_core::{User, UserError, UserId, UserStore, UserStoreError, normalize_email};
use secrecy::Secret;

/// Error types specific to user creation
#[derive(Debug, thiserror::Error)]
pub enum CreateUserError {
    #[error(transparent)]
    Validation(#[from] UserError),
    #[error("User with this email already exists")]
    Duplicate,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

impl From<UserStoreError> for CreateUserError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => Self::Duplicate,
            other => Self::UserStoreError(other),
        }
    }
}

/// User service - validates input and enforces email uniqueness on top of a
/// [`UserStore`]
#[derive(Clone)]
pub struct UserService<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> UserService<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Validate and store a new user
    ///
    /// # Arguments
    /// * `name` - Display name, trimmed before storing
    /// * `email` - Email address, lowercased before storing
    /// * `password` - Plain password, stored as given
    ///
    /// # Returns
    /// The stored user, or a validation / duplicate error
    #[tracing::instrument(name = "UserService::create_user", skip(self, password))]
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: Secret<String>,
    ) -> Result<User, CreateUserError> {
        let user = User::parse(name, email, password)?;

        self.user_store.add_user(user.clone()).await?;
        tracing::info!(user_id = %user.id(), "user created");

        Ok(user)
    }

    /// Look up a user by email and check the password.
    ///
    /// Unknown email and wrong password both yield `Ok(None)`.
    #[tracing::instrument(name = "UserService::authenticate", skip(self, password))]
    pub async fn authenticate(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Option<User>, UserStoreError> {
        let user = self
            .user_store
            .get_user_by_email(&normalize_email(email))
            .await?;

        Ok(user.filter(|user| user.password_matches(password)))
    }

    pub async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        self.user_store.get_user_by_id(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        self.user_store
            .get_user_by_email(&normalize_email(email))
            .await
    }

    /// Remove every user. Intended for resetting state between tests.
    pub async fn clear(&self) -> Result<(), UserStoreError> {
        self.user_store.clear().await
    }
}
