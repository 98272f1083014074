//! Application builder — wires repositories, services, and the router, and
//! runs the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use lecturehub_auth::jwt::{JwtDecoder, JwtEncoder};
use lecturehub_auth::password::{PasswordHasher, PasswordValidator};
use lecturehub_core::config::AppConfig;
use lecturehub_core::error::AppError;
use lecturehub_database::repositories::{
    EnrollmentRepository, LectureRepository, PgEnrollmentStore, UserRepository,
};
use lecturehub_database::DatabasePool;
use lecturehub_entity::enrollment::EnrollmentStore;
use lecturehub_service::{AuthService, EnrollmentService, LectureService, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a connected
/// pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let lecture_repo = Arc::new(LectureRepository::new(db.pool().clone()));
    let enrollment_repo = Arc::new(EnrollmentRepository::new(db.pool().clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let lock_wait = Duration::from_millis(config.enrollment.lock_wait_ms);
    let enrollment_store: Arc<dyn EnrollmentStore> =
        Arc::new(PgEnrollmentStore::new(db.pool().clone(), lock_wait));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let lecture_service = Arc::new(LectureService::new(Arc::clone(&lecture_repo)));
    let enrollment_service = Arc::new(EnrollmentService::new(enrollment_store));

    AppState {
        config: Arc::new(config),
        db,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        lecture_repo,
        enrollment_repo,
        auth_service,
        user_service,
        lecture_service,
        enrollment_service,
    }
}

/// Runs the LectureHub server with the given configuration and database
/// pool. Returns when the server shuts down.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = config.server.bind_addr();
    let state = build_state(config, db);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LectureHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
