// Start of file: /src/api/documentation/handler.rs

// * The OpenAPI document is assembled from the `#[utoipa::path]` annotations
// * of every handler and built once, on first request.

use axum::{
    response::{Html, Redirect},
    Json,
};
use once_cell::sync::Lazy;
use utoipa::OpenApi;

use crate::api::health::{handler as health, models::HealthStatus};
use crate::api::hello::{
    handler as hello,
    models::{HelloWorldRequestBody, HelloWorldResponse},
};
use crate::utils::error_handler::ErrorResponse;

pub const OPENAPI_JSON_PATH: &str = "/documentation/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui/index.html";

// * Swagger UI assets come from the public swagger-ui-dist bundle; the
// * document to render is passed as the `url` query parameter.
const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>service-api documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      const url = new URLSearchParams(window.location.search).get("url") || "/documentation/openapi.json";
      window.ui = SwaggerUIBundle({ url, dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

#[derive(OpenApi)]
#[openapi(
    info(title = "service-api", description = "Microservice template"),
    paths(
        hello::hello_get,
        hello::hello_post,
        hello::hello_with_call,
        health::healthz,
        health::ready,
        health::check_up,
    ),
    components(schemas(
        HelloWorldRequestBody,
        HelloWorldResponse,
        HealthStatus,
        ErrorResponse,
    )),
    tags(
        (name = "hello", description = "Greeting endpoints"),
        (name = "health", description = "Platform probes")
    )
)]
pub struct ApiDoc;

static OPENAPI: Lazy<utoipa::openapi::OpenApi> = Lazy::new(ApiDoc::openapi);

pub async fn openapi_json() -> Json<&'static utoipa::openapi::OpenApi> {
    Json(&*OPENAPI)
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

pub async fn documentation() -> Redirect {
    Redirect::temporary(&format!("{SWAGGER_UI_PATH}?url={OPENAPI_JSON_PATH}"))
}


// End of file: /src/api/documentation/handler.rs
