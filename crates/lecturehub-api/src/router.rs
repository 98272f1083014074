//! Route definitions for the LectureHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(lecture_routes())
        .merge(enrollment_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, reissue, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/reissue", post(handlers::auth::reissue))
        .route("/auth/me", get(handlers::auth::me))
}

/// Registration endpoint
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(handlers::user::signup))
}

/// Lecture publication and catalog
fn lecture_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/lectures",
            get(handlers::lecture::list).post(handlers::lecture::create),
        )
        .route("/lectures/{id}", get(handlers::lecture::get))
}

/// Batch admission and enrollment records
fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/enrollments", post(handlers::enrollment::enroll))
        .route(
            "/enrollments/me",
            get(handlers::enrollment::my_enrollments),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_origins;

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<axum::http::HeaderValue> =
            origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
