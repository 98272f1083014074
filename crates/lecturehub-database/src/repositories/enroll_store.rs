//! PostgreSQL implementation of the enrollment storage collaborator.
//!
//! Admission attempts against the same lecture serialize on a
//! `SELECT ... FOR UPDATE` row lock; attempts against different lectures
//! proceed in parallel. The lock, the duplicate check, the seat increment,
//! and the record insert all share one transaction, so every failure path
//! rolls back completely and no partial effect is ever observable. This is
//! correct across any number of server processes sharing the database,
//! unlike in-process synchronization.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::{Postgres, Transaction};

use lecturehub_core::error::{AppError, ErrorKind};
use lecturehub_core::result::AppResult;
use lecturehub_core::types::{LectureId, UserId};
use lecturehub_entity::enrollment::{Enrollment, EnrollmentStore, EnrollmentTx, LectureSeat};

/// Postgres `lock_timeout` SQLSTATE: the bounded wait for the row hold
/// expired.
const LOCK_NOT_AVAILABLE: &str = "55P03";

/// Opens enrollment transactions against PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgEnrollmentStore {
    pool: PgPool,
    /// Bounded wait for the exclusive row hold.
    lock_wait: Duration,
}

impl PgEnrollmentStore {
    /// Create a new store with the given bounded lock wait.
    pub fn new(pool: PgPool, lock_wait: Duration) -> Self {
        Self { pool, lock_wait }
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore {
    async fn begin(&self) -> AppResult<Box<dyn EnrollmentTx>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // SET LOCAL scopes the bound to this transaction only.
        let stmt = format!("SET LOCAL lock_timeout = '{}ms'", self.lock_wait.as_millis());
        sqlx::query(&stmt).execute(&mut *tx).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set lock timeout", e)
        })?;

        Ok(Box::new(PgEnrollmentTx { tx }))
    }
}

/// One in-flight enrollment transaction. Dropping it without commit rolls
/// back via sqlx's transaction guard.
struct PgEnrollmentTx {
    tx: Transaction<'static, Postgres>,
}

impl PgEnrollmentTx {
    fn map_lock_error(e: sqlx::Error, lecture_id: LectureId) -> AppError {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.code().as_deref() == Some(LOCK_NOT_AVAILABLE) {
                return AppError::timeout(format!(
                    "Timed out waiting for the seat lock on lecture {lecture_id}"
                ));
            }
        }
        AppError::with_source(ErrorKind::Database, "Failed to lock lecture row", e)
    }
}

#[async_trait]
impl EnrollmentTx for PgEnrollmentTx {
    async fn lock_lecture(&mut self, lecture_id: LectureId) -> AppResult<Option<LectureSeat>> {
        sqlx::query_as::<_, LectureSeat>(
            "SELECT id, title, current_participants, max_participants \
             FROM lectures WHERE id = $1 \
             FOR UPDATE",
        )
        .bind(lecture_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| Self::map_lock_error(e, lecture_id))
    }

    async fn reserve_seat(&mut self, lecture_id: LectureId) -> AppResult<()> {
        // The row is already held FOR UPDATE; the capacity predicate is a
        // second line of defense alongside the schema CHECK constraint.
        let result = sqlx::query(
            "UPDATE lectures \
             SET current_participants = current_participants + 1, updated_at = NOW() \
             WHERE id = $1 AND current_participants < max_participants",
        )
        .bind(lecture_id)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reserve seat", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::database(format!(
                "Seat reservation raced past the capacity check for lecture {lecture_id}"
            )));
        }
        Ok(())
    }

    async fn is_enrolled(&mut self, lecture_id: LectureId, student_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM enrollments WHERE lecture_id = $1 AND student_id = $2)",
        )
        .bind(lecture_id)
        .bind(student_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for enrollment", e)
        })
    }

    async fn insert_enrollment(
        &mut self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> AppResult<Enrollment> {
        sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (lecture_id, student_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(lecture_id)
        .bind(student_id)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("enrollments_lecture_student_key") =>
            {
                AppError::conflict("Student is already enrolled in this lecture")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert enrollment", e),
        })
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit enrollment", e)
        })
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.tx.rollback().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to roll back enrollment", e)
        })
    }
}

impl std::fmt::Debug for PgEnrollmentTx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgEnrollmentTx").finish_non_exhaustive()
    }
}
