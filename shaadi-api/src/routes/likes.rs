use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use shaadi_shared::errors::{AppError, AppResult, ErrorCode};
use shaadi_shared::types::auth::AuthUser;
use shaadi_shared::types::ApiResponse;

use crate::models::{Like, Profile};
use crate::services::like_service;
use crate::AppState;

// --- POST /like/:id ---

pub async fn like_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> AppResult<Json<ApiResponse<Like>>> {
    let target_id = Uuid::parse_str(&target)
        .map_err(|_| AppError::new(ErrorCode::ValidationError, format!("invalid profile id: {target}")))?;

    let like = like_service::record_like(state.store.as_ref(), user.id, target_id)?;
    Ok(Json(ApiResponse::ok_with_message(like, "Profile liked")))
}

// --- GET /likes ---

pub async fn list_likes(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Profile>>>> {
    let liked = like_service::list_liked_profiles(state.store.as_ref(), user.id)?;
    Ok(Json(ApiResponse::ok(liked)))
}
