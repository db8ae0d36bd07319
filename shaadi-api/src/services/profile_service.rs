use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use shaadi_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::{CreateProfileRequest, Profile, UpdateProfileRequest};
use crate::services::auth_service;
use crate::store::Store;

/// Registers a profile. The plaintext password is replaced by its hash
/// before anything reaches the store.
pub fn create_profile(store: &dyn Store, req: CreateProfileRequest) -> AppResult<Profile> {
    req.validate().map_err(|e| {
        let details = serde_json::to_value(&e).unwrap_or_default();
        AppError::with_details(ErrorCode::ValidationError, e.to_string(), details)
    })?;

    let password_hash = auth_service::hash_password(&req.password)?;
    let profile = store.insert_profile(&req.into_profile(password_hash))?;

    tracing::info!(
        profile_id = %profile.id,
        username = %profile.username,
        "profile created"
    );

    Ok(profile)
}

pub fn list_profiles(store: &dyn Store) -> AppResult<Vec<Profile>> {
    store.list_profiles()
}

pub fn get_profile(store: &dyn Store, id: Uuid) -> AppResult<Profile> {
    store.find_profile(id)?.ok_or_else(AppError::profile_not_found)
}

/// Partial update: only truthy incoming values replace stored ones.
pub fn update_profile(store: &dyn Store, id: Uuid, changes: UpdateProfileRequest) -> AppResult<Profile> {
    let mut profile = get_profile(store, id)?;
    changes.apply_to(&mut profile);
    profile.updated_at = Utc::now();

    let updated = store.save_profile(&profile)?;
    tracing::info!(profile_id = %updated.id, "profile updated");
    Ok(updated)
}

pub fn delete_profile(store: &dyn Store, id: Uuid) -> AppResult<()> {
    get_profile(store, id)?;
    if !store.delete_profile(id)? {
        // Lost a race with another delete.
        return Err(AppError::profile_not_found());
    }

    tracing::info!(profile_id = %id, "profile deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, ProfileStore};

    fn request(username: &str, password: &str) -> CreateProfileRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Ravi",
            "age": 30,
            "gender": "M",
            "p_gender": "F",
            "username": username,
            "password": password,
        }))
        .unwrap()
    }

    #[test]
    fn create_stores_only_the_hash() {
        let store = MemoryStore::new();
        let profile = create_profile(&store, request("ravi", "s3cret")).unwrap();

        assert_ne!(profile.password_hash, "s3cret");
        assert!(profile.password_hash.starts_with("$argon2"));
        assert!(auth_service::verify_password("s3cret", &profile.password_hash).unwrap());
    }

    #[test]
    fn create_requires_username_and_password() {
        let store = MemoryStore::new();
        let err = create_profile(&store, request("", "pw")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = create_profile(&store, request("ravi", "")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(store.list_profiles().unwrap().is_empty());
    }

    #[test]
    fn update_name_only_keeps_age() {
        let store = MemoryStore::new();
        let profile = create_profile(&store, request("ravi", "pw")).unwrap();

        let changes: UpdateProfileRequest =
            serde_json::from_value(serde_json::json!({ "name": "Asha", "age": 0, "gender": "" })).unwrap();
        let updated = update_profile(&store, profile.id, changes).unwrap();

        assert_eq!(updated.name.as_deref(), Some("Asha"));
        assert_eq!(updated.age, Some(30));
        assert_eq!(updated.gender.as_deref(), Some("M"));
        assert_eq!(get_profile(&store, profile.id).unwrap(), updated);
    }

    #[test]
    fn update_unknown_profile_is_not_found() {
        let store = MemoryStore::new();
        let err = update_profile(&store, Uuid::now_v7(), UpdateProfileRequest::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ProfileNotFound);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = MemoryStore::new();
        let profile = create_profile(&store, request("ravi", "pw")).unwrap();

        delete_profile(&store, profile.id).unwrap();
        assert_eq!(get_profile(&store, profile.id).unwrap_err().code(), ErrorCode::ProfileNotFound);
        assert_eq!(delete_profile(&store, profile.id).unwrap_err().code(), ErrorCode::ProfileNotFound);
    }
}
