use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::Config;
use crate::db::{Database, DbSession};
use crate::errors::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub config: Config,
    pub db: Database,
}

/// Basic service information
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    /// Application name
    pub message: String,
    pub version: String,
    /// Path of the interactive API documentation
    pub docs: String,
    /// Path of the ReDoc documentation
    pub redoc: String,
    /// Path of the OpenAPI document
    pub openapi: String,
}

/// Liveness / readiness status
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service information
#[utoipa::path(
    get,
    path = "/",
    tag = "general",
    responses(
        (status = 200, description = "Service information", body = RootResponse)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.config.app.name.clone(),
        version: state.config.app.version.clone(),
        docs: "/docs".to_string(),
        redoc: "/redoc".to_string(),
        openapi: "/openapi.json".to_string(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "general",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.config.app.version.clone(),
    })
}

/// Readiness check: the database must accept a session
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "general",
    responses(
        (status = 200, description = "Service can reach its database", body = HealthResponse),
        (status = 503, description = "Database is unavailable", body = crate::errors::ErrorEnvelope)
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
    mut session: DbSession,
) -> Result<Json<HealthResponse>, ApiError> {
    sqlx::query("SELECT 1").execute(&mut *session).await?;

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: state.config.app.version.clone(),
    }))
}
