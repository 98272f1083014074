//! Lecture creation (instructor-only) and catalog queries.

use std::sync::Arc;

use tracing::info;

use lecturehub_core::error::AppError;
use lecturehub_core::result::AppResult;
use lecturehub_core::types::pagination::{PageRequest, PageResponse};
use lecturehub_core::types::LectureSort;
use lecturehub_database::repositories::lecture::LectureRepository;
use lecturehub_entity::lecture::{CreateLecture, Lecture, LectureSummary};

use crate::context::RequestContext;

/// Handles lecture publication and catalog browsing.
#[derive(Debug, Clone)]
pub struct LectureService {
    /// Lecture repository.
    lecture_repo: Arc<LectureRepository>,
}

/// Data for publishing a new lecture.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateLectureRequest {
    /// Lecture title.
    pub title: String,
    /// Price in the platform currency unit.
    pub price: i32,
    /// Fixed seat capacity.
    pub max_participants: i32,
}

impl LectureService {
    /// Creates a new lecture service.
    pub fn new(lecture_repo: Arc<LectureRepository>) -> Self {
        Self { lecture_repo }
    }

    /// Publishes a new lecture. Instructors only.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateLectureRequest,
    ) -> AppResult<Lecture> {
        if !ctx.is_instructor() {
            return Err(AppError::authorization(
                "Only instructors can publish lectures",
            ));
        }

        if req.title.trim().is_empty() {
            return Err(AppError::validation("Lecture title cannot be empty"));
        }
        if req.price < 0 {
            return Err(AppError::validation("Price cannot be negative"));
        }
        if req.max_participants < 1 {
            return Err(AppError::validation(
                "A lecture needs at least one seat",
            ));
        }

        let lecture = self
            .lecture_repo
            .create(&CreateLecture {
                title: req.title,
                price: req.price,
                max_participants: req.max_participants,
                instructor_id: ctx.user_id,
            })
            .await?;

        info!(lecture_id = %lecture.id, instructor_id = %ctx.user_id, "Lecture published");

        Ok(lecture)
    }

    /// Lists the catalog with pagination and the requested sort order.
    pub async fn list(
        &self,
        page: &PageRequest,
        sort: LectureSort,
    ) -> AppResult<PageResponse<LectureSummary>> {
        self.lecture_repo.find_all(page, sort).await
    }
}
