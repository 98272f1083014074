//! Lecture repository implementation.
//!
//! Catalog queries only read `current_participants`; the seat count is
//! mutated exclusively by the enrollment store under its row lock.

use sqlx::PgPool;

use lecturehub_core::error::{AppError, ErrorKind};
use lecturehub_core::result::AppResult;
use lecturehub_core::types::pagination::{PageRequest, PageResponse};
use lecturehub_core::types::{LectureId, LectureSort};
use lecturehub_entity::lecture::{CreateLecture, Lecture, LectureSummary};

/// Repository for lecture creation and catalog queries.
#[derive(Debug, Clone)]
pub struct LectureRepository {
    pool: PgPool,
}

impl LectureRepository {
    /// Create a new lecture repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a lecture by primary key.
    pub async fn find_by_id(&self, id: LectureId) -> AppResult<Option<Lecture>> {
        sqlx::query_as::<_, Lecture>("SELECT * FROM lectures WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find lecture", e))
    }

    /// Create a new lecture with zero participants.
    pub async fn create(&self, data: &CreateLecture) -> AppResult<Lecture> {
        sqlx::query_as::<_, Lecture>(
            "INSERT INTO lectures (title, price, max_participants, instructor_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(data.price)
        .bind(data.max_participants)
        .bind(data.instructor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create lecture", e))
    }

    /// List catalog rows with pagination and the requested sort order.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        sort: LectureSort,
    ) -> AppResult<PageResponse<LectureSummary>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lectures")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count lectures", e)
            })?;

        // order_by_sql is a static fragment chosen from a closed enum. The
        // instructor name comes from a scalar subquery so the ORDER BY
        // columns stay unambiguous.
        let query = format!(
            "SELECT id, title, price, \
                    (SELECT username FROM users WHERE users.id = lectures.instructor_id) \
                        AS instructor_name, \
                    current_participants, max_participants \
             FROM lectures \
             ORDER BY {} \
             LIMIT $1 OFFSET $2",
            sort.order_by_sql()
        );

        let lectures = sqlx::query_as::<_, LectureSummary>(&query)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list lectures", e))?;

        Ok(PageResponse::new(
            lectures,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
