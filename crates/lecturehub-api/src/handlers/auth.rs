//! Auth handlers — login, reissue, me.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use lecturehub_core::error::AppError;
use lecturehub_service::auth::ReissueResult;

use crate::dto::request::{LoginRequest, ReissueRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: result.user.into(),
    })))
}

/// POST /api/auth/reissue
pub async fn reissue(
    State(state): State<AppState>,
    Json(req): Json<ReissueRequest>,
) -> Result<Json<ApiResponse<ReissueResult>>, ApiError> {
    let result = state
        .auth_service
        .reissue(&req.access_token, &req.refresh_token)
        .await?;

    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(user.into())))
}
