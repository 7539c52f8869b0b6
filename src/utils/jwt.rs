//! JWT creation and validation helpers.
//!
//! The portal does not run a login flow; incoming requests carry bearer
//! tokens minted by the identity provider with a shared secret.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Claims carried by portal access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id as a string
    pub sub: String,
    /// Display username
    pub username: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiration (seconds since epoch)
    pub exp: i64,
}

/// Generates an access token for the given user.
///
/// Used by tests and tooling; the portal itself only validates.
pub fn generate_access_token(
    user_id: i32,
    username: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let now = jiff::Timestamp::now().as_second();
    let claims = Claims {
        sub: user_id.to_string(),
        username,
        iat: now,
        exp: now + expiration_hours * 3600,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })
}

/// Validates an access token and returns its claims.
///
/// # Errors
/// Returns `Unauthorized` for expired, malformed, or mis-signed tokens.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized {
        message: format!("Invalid token: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[test]
    fn test_generate_and_validate_round_trip() {
        let token = generate_access_token(42, "hkim".to_string(), SECRET, 1).unwrap();
        let claims = validate_access_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "hkim");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let token = generate_access_token(1, "user".to_string(), SECRET, 1).unwrap();
        let result = validate_access_token(&token, "another_secret_also_32_chars_long!!");

        match result {
            Err(AppError::Unauthorized { .. }) => {}
            other => panic!("Expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let result = validate_access_token("not-a-token", SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        // Negative expiration puts exp in the past
        let token = generate_access_token(1, "user".to_string(), SECRET, -1).unwrap();
        let result = validate_access_token(&token, SECRET);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
