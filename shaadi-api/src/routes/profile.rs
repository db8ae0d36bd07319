use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use shaadi_shared::errors::AppResult;
use shaadi_shared::middleware::JsonBody;
use shaadi_shared::types::ApiResponse;

use super::profile_id_from_path;
use crate::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use crate::services::profile_service;
use crate::AppState;

// --- POST /profiles ---

pub async fn create_profile(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Profile>>)> {
    let profile = profile_service::create_profile(state.store.as_ref(), req)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(profile, "Profile Created")),
    ))
}

// --- GET /profiles ---

pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Profile>>>> {
    let profiles = profile_service::list_profiles(state.store.as_ref())?;
    Ok(Json(ApiResponse::ok(profiles)))
}

// --- GET /profiles/:id ---

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let id = profile_id_from_path(&id)?;
    let profile = profile_service::get_profile(state.store.as_ref(), id)?;
    Ok(Json(ApiResponse::ok(profile)))
}

// --- PUT /profiles/:id ---

pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let id = profile_id_from_path(&id)?;
    let profile = profile_service::update_profile(state.store.as_ref(), id, changes)?;
    Ok(Json(ApiResponse::ok(profile)))
}

// --- DELETE /profiles/:id ---

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = profile_id_from_path(&id)?;
    profile_service::delete_profile(state.store.as_ref(), id)?;
    Ok(Json(ApiResponse::message("Profile deleted")))
}
