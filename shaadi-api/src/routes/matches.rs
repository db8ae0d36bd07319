use axum::extract::State;
use axum::Json;

use shaadi_shared::errors::AppResult;
use shaadi_shared::types::auth::AuthUser;
use shaadi_shared::types::ApiResponse;

use crate::models::Profile;
use crate::services::match_service;
use crate::AppState;

// --- GET /matches ---

pub async fn get_matches(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Profile>>>> {
    let matches = match_service::compute_matches(state.store.as_ref(), user.id)?;
    Ok(Json(ApiResponse::ok(matches)))
}
