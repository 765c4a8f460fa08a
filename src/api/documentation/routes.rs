// Start of file: /src/api/documentation/routes.rs

use axum::{routing::get, Router};

use crate::api::documentation::handler::{self, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::config::state::AppState;

pub fn documentation_routes() -> Router<AppState> {
    Router::new()
        .route("/documentation", get(handler::documentation))
        .route(OPENAPI_JSON_PATH, get(handler::openapi_json))
        .route(SWAGGER_UI_PATH, get(handler::swagger_ui))
}

// End of file: /src/api/documentation/routes.rs
