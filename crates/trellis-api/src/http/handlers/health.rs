//! Unauthenticated service endpoints.
//!
//! GET /        - Service metadata and links.
//! GET /health  - Liveness probe.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Display name of the service.
pub const SERVICE_TITLE: &str = "Trellis API Template";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    /// `/docs` when the OpenAPI document is served, otherwise `disabled`.
    pub docs: String,
    pub health: String,
}

/// GET /health - Liveness probe (no auth required).
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
    tag = "service"
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        message: "API is up and running.".to_string(),
    })
}

/// GET / - Service metadata (no auth required).
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service metadata", body = ServiceInfo)),
    tag = "service"
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_TITLE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: if state.settings.enable_swagger {
            "/docs".to_string()
        } else {
            "disabled".to_string()
        },
        health: "/health".to_string(),
    })
}
