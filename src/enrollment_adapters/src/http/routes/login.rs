use axum::{Json, extract::State, response::IntoResponse};
use enrollment_core::UserStore;

use crate::api::{ApiError, ApiResponse, LoginRequest, UserApi};

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U>(
    State(api): State<UserApi<U>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let summary = api.try_login(&request.email, &request.password).await?;

    Ok(Json(ApiResponse::success(summary)))
}
