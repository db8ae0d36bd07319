use axum::extract::State;
use axum::Json;

use shaadi_shared::errors::AppResult;
use shaadi_shared::middleware::JsonBody;
use shaadi_shared::types::auth::LoginToken;
use shaadi_shared::types::ApiResponse;

use crate::models::LoginRequest;
use crate::services::auth_service;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginToken>>> {
    let (profile, token) =
        auth_service::authenticate(state.store.as_ref(), &state.jwt, &req.username, &req.password)?;

    tracing::info!(profile_id = %profile.id, "user logged in");

    Ok(Json(ApiResponse::ok_with_message(token, "Login successful")))
}
