use enrollment_application::CreateUserError;
use thiserror::Error;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Classified failure at the API boundary. The `Display` text is exactly what
/// ends up in the response's `error` field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Carries the public message only; the cause is logged where it happens.
    #[error("{0}")]
    Unexpected(&'static str),
}

impl From<CreateUserError> for ApiError {
    fn from(error: CreateUserError) -> Self {
        match error {
            CreateUserError::Validation(e) => ApiError::InvalidInput(e.to_string()),
            CreateUserError::Duplicate => ApiError::UserAlreadyExists,
            CreateUserError::UserStoreError(e) => {
                tracing::error!(error = %e, "registration failed");
                ApiError::Unexpected(REGISTRATION_FAILED_MESSAGE)
            }
        }
    }
}
