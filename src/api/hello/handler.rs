// Start of file: /src/api/hello/handler.rs

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        MatchedPath, Path, Query, State,
    },
    http::HeaderMap,
    Json,
};
use tracing::{error, info, instrument};

use crate::api::hello::models::{HelloWorldGetRequest, HelloWorldRequestBody, HelloWorldResponse};
use crate::config::state::AppState;
use crate::utils::error_handler::{AppError, ErrorResponse, ServiceError};
use crate::utils::headers::ProxyHeaders;

/// Error code returned when the books service cannot be reached or answers badly.
pub const BOOKS_CALL_FAILED_CODE: i32 = 1002;
pub const BOOKS_CALL_FAILED_MESSAGE: &str = "books call failed";

/// Plain greeting, echoing the optional query parameter
#[utoipa::path(
    get,
    path = "/hello",
    tag = "hello",
    params(("queryParam" = Option<String>, Query, description = "Echoed back as query_param")),
    responses(
        (status = 200, description = "Greeting", body = HelloWorldResponse),
        (status = 400, description = "Invalid query string", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn hello_get(
    query: Result<Query<HelloWorldGetRequest>, QueryRejection>,
) -> Result<Json<HelloWorldResponse>, ServiceError> {
    let Query(params) = query?;

    Ok(Json(HelloWorldResponse::new(None, params.query_param, "Hello world!")))
}

/// Greets the person described by the body
#[utoipa::path(
    post,
    path = "/hello/{pathParam}",
    tag = "hello",
    params(("pathParam" = String, Path, description = "Echoed back as path_param")),
    request_body = HelloWorldRequestBody,
    responses(
        (status = 200, description = "Greeting", body = HelloWorldResponse),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn hello_post(
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<HelloWorldRequestBody>, JsonRejection>,
) -> Result<Json<HelloWorldResponse>, ServiceError> {
    let Path(path_param) = path?;

    greet_person(path_param, body)
}

/// `POST` on a static route below `/hello` (such as `/hello/with-call`).
/// The static segment wins over `{pathParam}` when matching, so the
/// greeting takes the last segment of the matched route as its path param.
#[instrument(skip_all)]
pub async fn hello_post_static(
    matched: MatchedPath,
    body: Result<Json<HelloWorldRequestBody>, JsonRejection>,
) -> Result<Json<HelloWorldResponse>, ServiceError> {
    let path_param: String = matched
        .as_str()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    greet_person(path_param, body)
}

fn greet_person(
    path_param: String,
    body: Result<Json<HelloWorldRequestBody>, JsonRejection>,
) -> Result<Json<HelloWorldResponse>, ServiceError> {
    let Json(body) = body?;

    let greeting: String = format!("Hello world {} {}!", body.name, body.surname);

    Ok(Json(HelloWorldResponse::new(Some(path_param), None, greeting)))
}

/// Greeting listing the books of the CRUD service. Platform headers of the
/// inbound request are forwarded on the downstream call.
#[utoipa::path(
    get,
    path = "/hello/with-call",
    tag = "hello",
    params(("queryParam" = Option<String>, Query, description = "Echoed back as query_param")),
    responses(
        (status = 200, description = "Greeting with the book list", body = HelloWorldResponse),
        (status = 500, description = "Books service call failed", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn hello_with_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<HelloWorldGetRequest>, QueryRejection>,
) -> Result<Json<HelloWorldResponse>, ServiceError> {
    let Query(params) = query?;

    let proxied: ProxyHeaders = state.header_selector.select(&headers);
    info!(forwarded = proxied.len(), "Calling books service");

    let books: Vec<String> = state.books.get_books(&proxied).await.map_err(|err| {
        error!(error = %err, "Books service call failed");
        AppError::internal(BOOKS_CALL_FAILED_CODE, BOOKS_CALL_FAILED_MESSAGE)
    })?;

    let greeting: String = format!("Hello world! Book list: {}", books.join(", "));

    Ok(Json(HelloWorldResponse::new(None, params.query_param, greeting)))
}

// End of file: /src/api/hello/handler.rs
