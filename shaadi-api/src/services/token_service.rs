use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use shaadi_shared::errors::AppError;
use shaadi_shared::types::auth::{Claims, JwtKeys, LoginToken};

pub fn create_access_token(profile_id: Uuid, keys: &JwtKeys) -> Result<String, AppError> {
    let claims = Claims::new(profile_id, keys.ttl_secs);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(keys.secret()),
    )
    .map_err(|e| AppError::internal(format!("JWT encoding failed: {e}")))
}

pub fn issue_login_token(profile_id: Uuid, keys: &JwtKeys) -> Result<LoginToken, AppError> {
    let token = create_access_token(profile_id, keys)?;
    Ok(LoginToken::new(token, keys.ttl_secs))
}
