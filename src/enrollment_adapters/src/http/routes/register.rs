use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use enrollment_core::UserStore;

use crate::api::{ApiError, ApiResponse, RegistrationRequest, UserApi};

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U>(
    State(api): State<UserApi<U>>,
    Json(request): Json<RegistrationRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let summary = api.try_register(request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(summary))))
}
