//! Bearer token authentication middleware.
//!
//! Validates the JWT from the Authorization header and exposes the
//! authenticated user to handlers via request extensions.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Extension type for authenticated user information.
///
/// Added to request extensions after successful authentication; handlers
/// can extract it with `Extension<AuthUser>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User ID from JWT claims
    pub user_id: i32,
    /// Username from JWT claims
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub.parse().unwrap_or(0),
            username: claims.username,
        }
    }
}

/// JWT authentication middleware.
///
/// # Headers
/// Expects: `Authorization: Bearer <token>`
///
/// # Errors
/// Returns 401 Unauthorized if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token validation fails or the token has expired
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    let claims = validate_access_token(token, &state.jwt_config.secret)?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::generate_access_token;

    const SECRET: &str = "test_secret_key_at_least_32_characters_long";

    #[test]
    fn test_auth_user_from_claims() {
        let claims = Claims {
            sub: "123".to_string(),
            username: "testuser".to_string(),
            iat: 0,
            exp: 9999999999,
        };

        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.user_id, 123);
        assert_eq!(auth_user.username, "testuser");
    }

    #[test]
    fn test_auth_user_from_claims_invalid_id() {
        let claims = Claims {
            sub: "invalid".to_string(),
            username: "testuser".to_string(),
            iat: 0,
            exp: 9999999999,
        };

        // Falls back to 0 on parse error
        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.user_id, 0);
    }

    #[test]
    fn test_generated_token_round_trips_through_validation() {
        let token = generate_access_token(7, "testuser".to_string(), SECRET, 1).unwrap();
        let claims = validate_access_token(&token, SECRET).unwrap();
        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.user_id, 7);
    }
}
