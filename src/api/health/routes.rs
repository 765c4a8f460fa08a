// Health route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Probe routes under the `/-/` prefix
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/-/healthz", get(handler::healthz))
        .route("/-/ready", get(handler::ready))
        .route("/-/check-up", get(handler::check_up))
}
