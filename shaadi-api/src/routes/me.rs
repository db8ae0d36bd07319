use axum::extract::State;
use axum::Json;

use shaadi_shared::errors::AppResult;
use shaadi_shared::types::auth::AuthUser;
use shaadi_shared::types::ApiResponse;

use crate::models::Profile;
use crate::services::profile_service;
use crate::AppState;

/// GET /getUserDetails - the caller's own profile. A token can outlive its
/// profile, in which case this is a 404.
pub async fn get_user_details(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let profile = profile_service::get_profile(state.store.as_ref(), user.id)?;
    Ok(Json(ApiResponse::ok(profile)))
}
