// JWT token creation and verification
// Bearer tokens for the content management endpoints

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::Role;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user id)
/// * `username` - Login name at issue time
/// * `role` - Role at issue time
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: Role,
    pub exp: usize,
}

/// Creates a signed HS256 token for a user
///
/// # Example
/// ```
/// use portfolio_api::auth::jwt::create_token;
/// use portfolio_api::domain::user::Role;
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), "ada", Role::Admin, "secret", 8)
///     .expect("valid token");
/// assert!(!token.is_empty());
/// ```
pub fn create_token(
    user_id: Uuid,
    username: &str,
    role: Role,
    secret: &str,
    lifetime_hours: i64,
) -> Result<String, String> {
    let expiry = Utc::now() + Duration::hours(lifetime_hours);
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        role,
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a token, rejecting bad signatures and expired tokens
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
