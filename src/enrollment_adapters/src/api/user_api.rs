use enrollment_application::UserService;
use enrollment_core::{UserStore, UserSummary};
use secrecy::Secret;
use serde::Deserialize;

use super::{
    error::{ApiError, LOGIN_FAILED_MESSAGE},
    response::ApiResponse,
};

#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

/// Registration and login endpoints over a [`UserService`].
#[derive(Clone)]
pub struct UserApi<U>
where
    U: UserStore,
{
    user_service: UserService<U>,
}

impl<U> UserApi<U>
where
    U: UserStore,
{
    pub fn new(user_service: UserService<U>) -> Self {
        Self { user_service }
    }

    pub fn user_service(&self) -> &UserService<U> {
        &self.user_service
    }

    /// Register a new user; the response data never includes the password.
    pub async fn register(&self, request: RegistrationRequest) -> ApiResponse<UserSummary> {
        self.try_register(request).await.into()
    }

    /// Authenticate a user. Unknown email and wrong password produce the
    /// same failure.
    pub async fn login(&self, email: &str, password: &Secret<String>) -> ApiResponse<UserSummary> {
        self.try_login(email, password).await.into()
    }

    #[tracing::instrument(name = "UserApi::register", skip_all)]
    pub async fn try_register(
        &self,
        request: RegistrationRequest,
    ) -> Result<UserSummary, ApiError> {
        let user = self
            .user_service
            .create_user(&request.name, &request.email, request.password)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "registration rejected");
                ApiError::from(e)
            })?;

        Ok(user.summary())
    }

    #[tracing::instrument(name = "UserApi::login", skip_all)]
    pub async fn try_login(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<UserSummary, ApiError> {
        let user = self
            .user_service
            .authenticate(email, password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "login failed");
                ApiError::Unexpected(LOGIN_FAILED_MESSAGE)
            })?;

        match user {
            Some(user) => Ok(user.summary()),
            None => {
                tracing::info!("invalid login attempt");
                Err(ApiError::InvalidCredentials)
            }
        }
    }
}
