use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::users;

/// Token lifetime: one working day.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims carried in the HS256 access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a UUID string.
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub username: String,
    pub role: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid user ID in token: {e}"))
    }
}

/// Mint an access token for a user.
pub fn issue_token(
    user: &users::Model,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id.to_string(),
        exp: (now + TOKEN_TTL_SECS) as usize,
        iat: now as usize,
        username: user.username.clone(),
        role: serde_json::to_value(user.role)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate a token and return its claims. Expiry is enforced by
/// `jsonwebtoken`'s default validation.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
