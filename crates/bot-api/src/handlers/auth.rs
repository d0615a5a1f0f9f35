//! Authentication handlers
//!
//! Endpoints for user registration, login, logout, token refresh and the
//! current user's profile.

use axum::{extract::State, Json};
use bot_service::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, TokenResponse, UserResponse,
};
use bot_service::AuthService;

use crate::extractors::{AuthUser, BearerToken, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Re-issue the caller's token
///
/// POST /auth/refresh
///
/// Takes the raw bearer token: a recently expired token is still accepted.
pub async fn refresh_token(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&token).await?;
    Ok(Json(response))
}

/// Logout user
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.logout(auth.user_id).await?;
    Ok(Json(response))
}

/// Get current user
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}
