use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};

use crate::auth::token::{Claims, encode_token};
use crate::error::AppError;
use crate::models::UserProfile;
use crate::service;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: Option<String>,
    pub organization_code: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserProfile,
    pub token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

fn session_cookie(token: &str, ttl_hours: i64) -> CookieJar {
    let cookie = Cookie::build(("session_token", token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(ttl_hours))
        .build();

    CookieJar::new().add(cookie)
}

fn clear_session_cookie() -> CookieJar {
    let cookie = Cookie::build(("session_token", ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(cookie)
}

fn issue_token(state: &SharedState, user: &UserProfile) -> Result<String, AppError> {
    let claims = Claims::new(
        &user.id,
        &user.organization_id,
        user.role,
        state.config.session_ttl_hours,
    );
    encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)
}

pub async fn signup(
    State(state): State<SharedState>,
    Json(req): Json<SignupRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let user = service::auth::signup(
        &state.store,
        service::auth::SignupData {
            name: req.name,
            email: req.email,
            password: req.password,
            department: req.department,
            organization_code: req.organization_code,
        },
    )
    .await?;

    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = %user.id, org_id = %user.organization_id, "User signed up");

    let jar = session_cookie(&token, state.config.session_ttl_hours);
    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            user,
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if state.login_limiter.check(&req.email).is_err() {
        return Err(AppError::RateLimited(
            "Too many login attempts. Please try again later.".to_string(),
        ));
    }

    let user = match service::auth::login(&state.store, &req.email, &req.password).await {
        Ok(user) => user,
        Err(AppError::InvalidCredentials) => {
            state.login_limiter.record_failure(&req.email);
            return Err(AppError::InvalidCredentials);
        }
        Err(e) => return Err(e),
    };

    let token = issue_token(&state, &user)?;

    let jar = session_cookie(&token, state.config.session_ttl_hours);
    Ok((
        jar,
        Json(AuthResponse {
            success: true,
            user,
            token,
        }),
    ))
}

pub async fn logout() -> (CookieJar, Json<MessageResponse>) {
    (
        clear_session_cookie(),
        Json(MessageResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}
