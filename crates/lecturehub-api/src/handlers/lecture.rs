//! Lecture handlers — publish, catalog, detail.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use lecturehub_core::error::AppError;
use lecturehub_core::types::pagination::{PageRequest, PageResponse};
use lecturehub_core::types::{LectureId, LectureSort};
use lecturehub_entity::lecture::LectureSummary;
use lecturehub_service::lecture::CreateLectureRequest as CreateLecture;

use crate::dto::request::{CreateLectureRequest, LectureListQuery};
use crate::dto::response::{ApiResponse, LectureResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/lectures
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateLectureRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LectureResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let lecture = state
        .lecture_service
        .create(
            auth.context(),
            CreateLecture {
                title: req.title,
                price: req.price,
                max_participants: req.max_participants,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(lecture.into()))))
}

/// GET /api/lectures
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LectureListQuery>,
) -> Result<Json<ApiResponse<PageResponse<LectureSummary>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(20));

    let sort = match query.sort.as_deref() {
        None => LectureSort::default(),
        Some(raw) => raw
            .parse::<LectureSort>()
            .map_err(|_| AppError::validation(format!("Unknown sort order '{raw}'")))?,
    };

    let lectures = state.lecture_service.list(&page, sort).await?;

    Ok(Json(ApiResponse::ok(lectures)))
}

/// GET /api/lectures/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<LectureId>,
) -> Result<Json<ApiResponse<LectureResponse>>, ApiError> {
    let lecture = state
        .lecture_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Lecture not found"))?;

    Ok(Json(ApiResponse::ok(lecture.into())))
}
