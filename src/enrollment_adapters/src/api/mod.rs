//! Framework-agnostic request/response adapter.
//!
//! [`UserApi`] sits between a transport (HTTP routes, tests, a CLI) and the
//! [`UserService`](enrollment_application::UserService). It never lets an
//! error escape: every outcome is folded into an [`ApiResponse`].

pub mod error;
pub mod response;
pub mod user_api;

pub use error::ApiError;
pub use response::ApiResponse;
pub use user_api::{LoginRequest, RegistrationRequest, UserApi};
