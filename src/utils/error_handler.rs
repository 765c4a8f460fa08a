// Start of file: /src/utils/error_handler.rs

// * Error taxonomy and the single mapping from errors to HTTP responses.
// * Handlers never build error bodies themselves: they return a
// * `ServiceError` (usually via `AppError`) and everything ends up in
// * `map_error`.

use std::{any::Any, error::Error};

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    BoxError, Json,
};
// * Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use serde::{Deserialize, Serialize};
// * tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Application code used whenever a fault carries no code of its own.
pub const GENERIC_ERROR_CODE: i32 = 1000;

/// Message used when a fault carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Generic error";

/// Wire body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Application error code.
    #[schema(example = 1000)]
    pub code: i32,
    /// Human readable description.
    #[schema(example = "Generic error")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors raised on purpose by handlers, each with a stable code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("unauthorized ({code}): {message}")]
    Unauthorized { code: i32, message: String },
    #[error("not found ({code}): {message}")]
    NotFound { code: i32, message: String },
    #[error("bad request ({code}): {message}")]
    BadRequest { code: i32, message: String },
    #[error("internal server error ({code}): {message}")]
    InternalServerError { code: i32, message: String },
    #[error("error ({code}): {message}")]
    Generic { code: i32, message: String },
}

impl AppError {
    pub fn unauthorized(code: i32, message: impl Into<String>) -> Self {
        AppError::Unauthorized { code, message: message.into() }
    }

    pub fn not_found(code: i32, message: impl Into<String>) -> Self {
        AppError::NotFound { code, message: message.into() }
    }

    pub fn bad_request(code: i32, message: impl Into<String>) -> Self {
        AppError::BadRequest { code, message: message.into() }
    }

    pub fn internal(code: i32, message: impl Into<String>) -> Self {
        AppError::InternalServerError { code, message: message.into() }
    }

    /// A generic error with the default code.
    pub fn generic(message: impl Into<String>) -> Self {
        AppError::Generic { code: GENERIC_ERROR_CODE, message: message.into() }
    }

    pub fn code(&self) -> i32 {
        match self {
            AppError::Unauthorized { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::InternalServerError { code, .. }
            | AppError::Generic { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::BadRequest { message, .. }
            | AppError::InternalServerError { message, .. }
            | AppError::Generic { message, .. } => message,
        }
    }
}

/// Everything that can terminate the handling of a request.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    App(#[from] AppError),
    /// No route matched the request.
    #[error("{0}")]
    RouteNotFound(String),
    /// A route matched the path but not the method.
    #[error("{0}")]
    MethodNotAllowed(String),
    /// The framework could not make sense of the request.
    #[error("{0}")]
    MalformedRequest(String),
    /// A body field had the wrong JSON type.
    #[error("{0}")]
    BodyShapeMismatch(String),
    /// A required body field was absent.
    #[error("{0}")]
    MissingField(String),
    /// Building the handler input failed; carries the wrapped error's message.
    #[error("{0}")]
    Invocation(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Uncaught { message: Option<String> },
}

impl ServiceError {
    /// Wraps a failure raised while preparing a handler call, surfacing the
    /// innermost cause's message.
    pub fn invocation(err: &(dyn Error + 'static)) -> Self {
        ServiceError::Invocation(innermost_message(err))
    }

    /// Any other fault, with its message if it has one.
    pub fn uncaught(message: Option<String>) -> Self {
        ServiceError::Uncaught { message }
    }
}

/// Translates an error into the status and body sent to the client.
///
/// Exactly one arm applies per error and the function never fails: empty
/// messages fall back to [`GENERIC_ERROR_MESSAGE`].
pub fn map_error(err: &ServiceError) -> (StatusCode, ErrorResponse) {
    let (status, code, message): (StatusCode, i32, &str) = match err {
        ServiceError::App(AppError::Unauthorized { code, message }) => {
            (StatusCode::UNAUTHORIZED, *code, message.as_str())
        }
        ServiceError::App(AppError::NotFound { code, message }) => {
            (StatusCode::NOT_FOUND, *code, message.as_str())
        }
        ServiceError::RouteNotFound(message) => {
            (StatusCode::NOT_FOUND, GENERIC_ERROR_CODE, message.as_str())
        }
        ServiceError::MethodNotAllowed(message) => {
            (StatusCode::METHOD_NOT_ALLOWED, GENERIC_ERROR_CODE, message.as_str())
        }
        ServiceError::App(AppError::BadRequest { code, message }) => {
            (StatusCode::BAD_REQUEST, *code, message.as_str())
        }
        ServiceError::MalformedRequest(message)
        | ServiceError::BodyShapeMismatch(message)
        | ServiceError::MissingField(message)
        | ServiceError::Invocation(message) => {
            (StatusCode::BAD_REQUEST, GENERIC_ERROR_CODE, message.as_str())
        }
        ServiceError::PayloadTooLarge(message) => {
            (StatusCode::PAYLOAD_TOO_LARGE, GENERIC_ERROR_CODE, message.as_str())
        }
        ServiceError::Timeout(message) => {
            (StatusCode::REQUEST_TIMEOUT, GENERIC_ERROR_CODE, message.as_str())
        }
        ServiceError::App(AppError::InternalServerError { code, message })
        | ServiceError::App(AppError::Generic { code, message }) => {
            (StatusCode::INTERNAL_SERVER_ERROR, *code, message.as_str())
        }
        ServiceError::Uncaught { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            GENERIC_ERROR_CODE,
            message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE),
        ),
    };

    let message: &str = if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE
    } else {
        message
    };

    (status, ErrorResponse::new(code, message))
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = map_error(&self);

        if status.is_server_error() {
            error!(status = status.as_u16(), code = body.code, "{}", body.message);
        } else {
            warn!(status = status.as_u16(), code = body.code, "{}", body.message);
        }

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ServiceError::App(self).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let message: String = err.body_text();
                if message.contains("missing field") {
                    ServiceError::MissingField(message)
                } else {
                    ServiceError::BodyShapeMismatch(message)
                }
            }
            JsonRejection::BytesRejection(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ServiceError::PayloadTooLarge(err.body_text())
            }
            other => ServiceError::MalformedRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::invocation(&rejection)
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => ServiceError::invocation(&err),
            other => ServiceError::MalformedRequest(other.body_text()),
        }
    }
}

/// Router fallback: no route matched the request.
pub async fn route_not_found(uri: Uri) -> ServiceError {
    ServiceError::RouteNotFound(format!("Resource not found: {}", uri.path()))
}

/// Router fallback: the path exists but has no handler for this method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ServiceError {
    ServiceError::MethodNotAllowed(format!("Method {method} not allowed on {}", uri.path()))
}

/// Maps errors produced by middleware layers (timeouts, body limits).
pub async fn handle_global_error(err: BoxError) -> Response {
    // ! 413 if the body was too large
    if let Some(cause) = find_cause::<LengthLimitError>(&*err) {
        return ServiceError::PayloadTooLarge(format!("Request body too large: {cause}"))
            .into_response();
    }

    // ! 408 if the request took too long
    if err.is::<Elapsed>() {
        return ServiceError::Timeout(format!("Request timeout: {err}")).into_response();
    }

    // ! Otherwise, 500
    ServiceError::uncaught(Some(err.to_string())).into_response()
}

/// Panic handler for `CatchPanicLayer`: panics become uncaught faults.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message: Option<String> = if let Some(s) = payload.downcast_ref::<String>() {
        Some(s.clone())
    } else {
        payload.downcast_ref::<&str>().map(|s| s.to_string())
    };

    ServiceError::uncaught(message).into_response()
}

// * A small helper function to find a specific cause in a chain of errors
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

// * Message of the deepest error in the chain (the error itself if it has no source)
fn innermost_message(err: &(dyn Error + 'static)) -> String {
    let mut current: &(dyn Error + 'static) = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}


// End of file: /src/utils/error_handler.rs
