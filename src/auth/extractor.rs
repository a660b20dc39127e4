use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::auth::token;
use crate::error::AppError;
use crate::models::UserRole;
use crate::state::SharedState;

/// The authenticated caller, resolved from the session token. Identity is
/// always taken from the token, never from request bodies.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub organization_id: String,
    pub role: UserRole,
}

impl From<token::Claims> for AuthUser {
    fn from(claims: token::Claims) -> Self {
        AuthUser {
            user_id: claims.sub,
            organization_id: claims.org,
            role: claims.role,
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // Try Bearer token from Authorization header first
        if let Some(auth_header) = parts.headers.get("authorization") {
            let auth_str = auth_header
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

            if let Some(raw) = auth_str.strip_prefix("Bearer ") {
                let claims = token::decode_token(raw, &state.config.jwt_secret)
                    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
                return Ok(claims.into());
            }
        }

        // Fall back to cookie-based auth
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get("session_token") {
            let claims = token::decode_token(cookie.value(), &state.config.jwt_secret)
                .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
            return Ok(claims.into());
        }

        Err(AppError::Unauthorized(
            "Missing authentication token".to_string(),
        ))
    }
}
