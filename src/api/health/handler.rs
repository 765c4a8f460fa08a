// Probe handlers. All three answer with the status computed at start-up.

use axum::{extract::State, Json};

use crate::api::health::models::HealthStatus;
use crate::config::state::AppState;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/-/healthz",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthStatus))
)]
pub async fn healthz(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health.as_ref().clone())
}

/// Readiness probe
#[utoipa::path(
    get,
    path = "/-/ready",
    tag = "health",
    responses((status = 200, description = "Service is ready", body = HealthStatus))
)]
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health.as_ref().clone())
}

/// Dependency check-up. There are no dependencies to check yet.
#[utoipa::path(
    get,
    path = "/-/check-up",
    tag = "health",
    responses((status = 200, description = "Dependencies are healthy", body = HealthStatus))
)]
pub async fn check_up(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.health.as_ref().clone())
}
