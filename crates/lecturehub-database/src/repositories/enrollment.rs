//! Enrollment record repository — read-only queries outside the
//! admission transaction.

use sqlx::PgPool;

use lecturehub_core::error::{AppError, ErrorKind};
use lecturehub_core::result::AppResult;
use lecturehub_core::types::UserId;
use lecturehub_entity::enrollment::Enrollment;

/// Repository for committed enrollment records.
#[derive(Debug, Clone)]
pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    /// Create a new enrollment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a student's enrollments, most recent first.
    pub async fn find_by_student(&self, student_id: UserId) -> AppResult<Vec<Enrollment>> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE student_id = $1 ORDER BY enrolled_at DESC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list enrollments", e)
        })
    }
}
