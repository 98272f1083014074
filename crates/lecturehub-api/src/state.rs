//! Application state shared across all handlers.

use std::sync::Arc;

use lecturehub_auth::jwt::{JwtDecoder, JwtEncoder};
use lecturehub_auth::password::PasswordHasher;
use lecturehub_core::config::AppConfig;
use lecturehub_database::repositories::enrollment::EnrollmentRepository;
use lecturehub_database::repositories::lecture::LectureRepository;
use lecturehub_database::repositories::user::UserRepository;
use lecturehub_database::DatabasePool;
use lecturehub_service::{AuthService, EnrollmentService, LectureService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Lecture repository
    pub lecture_repo: Arc<LectureRepository>,
    /// Enrollment read repository
    pub enrollment_repo: Arc<EnrollmentRepository>,

    /// Login and reissue
    pub auth_service: Arc<AuthService>,
    /// Registration
    pub user_service: Arc<UserService>,
    /// Lecture publication and catalog
    pub lecture_service: Arc<LectureService>,
    /// Batch admission
    pub enrollment_service: Arc<EnrollmentService>,
}
