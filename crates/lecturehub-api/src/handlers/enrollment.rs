//! Enrollment handlers — batch admission and the student's own records.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use lecturehub_entity::enrollment::BatchStatus;

use crate::dto::request::EnrollRequest;
use crate::dto::response::{ApiResponse, BatchEnrollResponse, EnrollmentResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/enrollments
///
/// Admits the authenticated student into the requested lectures, one
/// transaction per item. A batch where nothing committed answers 409;
/// full and partial success answer 200 with the per-item report.
pub async fn enroll(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<EnrollRequest>,
) -> Result<Response, ApiError> {
    let batch = state
        .enrollment_service
        .enroll_batch(auth.user_id, req.lecture_ids)
        .await?;

    let status = match batch.status {
        BatchStatus::Failure => StatusCode::CONFLICT,
        BatchStatus::Success | BatchStatus::PartialSuccess => StatusCode::OK,
    };

    let body = BatchEnrollResponse {
        status: batch.status.to_string(),
        results: batch.results,
    };

    Ok((status, Json(ApiResponse::ok(body))).into_response())
}

/// GET /api/enrollments/me
pub async fn my_enrollments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<EnrollmentResponse>>>, ApiError> {
    let enrollments = state.enrollment_repo.find_by_student(auth.user_id).await?;

    Ok(Json(ApiResponse::ok(
        enrollments.into_iter().map(Into::into).collect(),
    )))
}
