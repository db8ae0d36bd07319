use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use shaadi_shared::errors::{AppError, AppResult, ErrorCode};
use shaadi_shared::types::auth::{JwtKeys, LoginToken};

use crate::models::Profile;
use crate::services::token_service;
use crate::store::Store;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::internal(format!("password hashing failed: {e}")))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

fn invalid_credentials() -> AppError {
    AppError::new(ErrorCode::InvalidCredentials, "invalid username or password")
}

/// Checks a username/password pair and issues a bearer token for the
/// matching profile. Unknown users and wrong passwords are indistinguishable.
pub fn authenticate(
    store: &dyn Store,
    keys: &JwtKeys,
    username: &str,
    password: &str,
) -> AppResult<(Profile, LoginToken)> {
    let profile = store
        .find_profile_by_username(username)?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(password, &profile.password_hash)? {
        return Err(invalid_credentials());
    }

    let token = token_service::issue_login_token(profile.id, keys)?;
    Ok((profile, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::store::{MemoryStore, ProfileStore};
    use shaadi_shared::middleware::validate_jwt;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();
        assert_ne!(a, b);
        assert!(!a.contains("hunter2"));
        assert!(verify_password("hunter2", &a).unwrap());
        assert!(!verify_password("hunter3", &a).unwrap());
    }

    #[test]
    fn authenticate_checks_password() {
        let store = MemoryStore::new();
        let keys = JwtKeys::new("test-secret", 60);
        let mut profile = fixtures::profile("meera", "F", "M");
        profile.password_hash = hash_password("correct horse").unwrap();
        store.insert_profile(&profile).unwrap();

        let (found, token) = authenticate(&store, &keys, "meera", "correct horse").unwrap();
        assert_eq!(found.id, profile.id);
        assert_eq!(validate_jwt(&token.token, &keys).unwrap().sub, profile.id);

        for wrong in ["", "correct", "correct horse "] {
            let err = authenticate(&store, &keys, "meera", wrong).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidCredentials);
        }
    }

    #[test]
    fn unknown_user_is_invalid_credentials() {
        let store = MemoryStore::new();
        let keys = JwtKeys::new("test-secret", 60);
        let err = authenticate(&store, &keys, "nobody", "pw").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }
}
