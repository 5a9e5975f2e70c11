use crate::config::SecuritySettings;
use crate::errors::ApiError;
use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims: subject is the user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Mint an HS256 access token for a user id.
pub fn create_access_token(
    user_id: &str,
    settings: &SecuritySettings,
) -> Result<String, ApiError> {
    let expiry = Utc::now() + Duration::minutes(settings.jwt_expire_minutes);
    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiry.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
    .map_err(|e| ApiError::Authentication(format!("Failed to create token: {}", e)))
}

/// Validate the bearer token on a request and return its subject.
pub fn authenticate(req: &HttpRequest, settings: &SecuritySettings) -> Result<String, ApiError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Authentication("Not authenticated".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Authentication("Not authenticated".to_string()))?;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Authentication("Not authenticated".to_string()))?;

    Ok(data.claims.sub)
}

/// Validate the bearer token and require its subject to equal `user_id`.
pub fn authorize_user(
    req: &HttpRequest,
    settings: &SecuritySettings,
    user_id: &str,
) -> Result<(), ApiError> {
    let subject = authenticate(req, settings)?;
    if subject != user_id {
        return Err(ApiError::Authorization(
            "You can only access your own resources".to_string(),
        ));
    }
    Ok(())
}
