//! Health check handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match state.db.health_check().await {
        Ok(true) => "connected",
        Ok(false) | Err(_) => "unreachable",
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}
