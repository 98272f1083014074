//! User handlers — signup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use lecturehub_core::error::AppError;
use lecturehub_service::user::RegisterRequest;

use crate::dto::request::SignupRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/users
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(RegisterRequest {
            username: req.username,
            email: req.email,
            phone: req.phone,
            password: req.password,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}
