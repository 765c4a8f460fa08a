// Start of file: /src/api/hello/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::hello::handler;
use crate::config::state::AppState;

pub fn hello_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handler::hello_get))
        .route(
            "/hello/with-call",
            get(handler::hello_with_call).post(handler::hello_post_static),
        )
        .route("/hello/{pathParam}", post(handler::hello_post))
}

// End of file: /src/api/hello/routes.rs
