use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::errors::{AppError, ErrorCode};
use crate::types::auth::{AuthUser, Claims, JwtKeys};

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    JwtKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let token = extract_bearer_token(&parts.headers)?;
        let claims = validate_jwt(&token, &keys)?;

        Ok(AuthUser::from(claims))
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::unauthorized("access denied: missing authorization header"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("access denied: invalid authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| AppError::unauthorized("access denied: authorization header must use Bearer scheme"))?;

    if token.is_empty() {
        return Err(AppError::unauthorized("access denied: empty bearer token"));
    }

    Ok(token.to_string())
}

/// Decode and verify a bearer token against the shared secret.
pub fn validate_jwt(token: &str, keys: &JwtKeys) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(keys.secret()), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::new(ErrorCode::TokenInvalid, "invalid token: token has expired")
            }
            _ => AppError::new(ErrorCode::TokenInvalid, format!("invalid token: {e}")),
        })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn accepts_token_signed_with_shared_secret() {
        let keys = JwtKeys::new("secret-a", 60);
        let id = Uuid::now_v7();
        let token = sign(&Claims::new(id, 60), "secret-a");

        let claims = validate_jwt(&token, &keys).unwrap();
        assert_eq!(claims.sub, id);
    }

    #[test]
    fn rejects_foreign_secret() {
        let keys = JwtKeys::new("secret-a", 60);
        let token = sign(&Claims::new(Uuid::now_v7(), 60), "secret-b");

        let err = validate_jwt(&token, &keys).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TokenInvalid);
    }

    #[test]
    fn rejects_expired_token() {
        let keys = JwtKeys::new("secret-a", 60);
        let token = sign(&Claims::new(Uuid::now_v7(), -3600), "secret-a");

        let err = validate_jwt(&token, &keys).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TokenInvalid);
    }

    #[test]
    fn rejects_garbage() {
        let keys = JwtKeys::new("secret-a", 60);
        assert_eq!(validate_jwt("not.a.jwt", &keys).unwrap_err().code(), ErrorCode::TokenInvalid);
    }

    #[test]
    fn missing_or_malformed_header_is_unauthorized() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers).unwrap_err().code(), ErrorCode::Unauthorized);

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_bearer_token(&headers).unwrap_err().code(), ErrorCode::Unauthorized);

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer "));
        assert_eq!(extract_bearer_token(&headers).unwrap_err().code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
