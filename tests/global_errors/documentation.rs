//! tests/global_errors/documentation.rs
//! The generated OpenAPI document is served and lists every route.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common::{self, StubBooks};

#[tokio::test]
async fn serves_openapi_document() {
    let base_url: String = common::spawn_app(StubBooks::returning(&[])).await;

    let resp: reqwest::Response = reqwest::get(format!("{}/documentation/openapi.json", base_url))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    for path in ["/hello", "/hello/{pathParam}", "/hello/with-call", "/-/healthz"] {
        assert!(json["paths"].get(path).is_some(), "missing {path}");
    }
}

#[tokio::test]
async fn documentation_root_redirects_to_swagger_ui() {
    let base_url: String = common::spawn_app(StubBooks::returning(&[])).await;

    let client: reqwest::Client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let resp: reqwest::Response = client
        .get(format!("{}/documentation", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers()["location"],
        "/swagger-ui/index.html?url=/documentation/openapi.json"
    );
}

#[tokio::test]
async fn swagger_ui_page_is_served() {
    let base_url: String = common::spawn_app(StubBooks::returning(&[])).await;

    let resp: reqwest::Response = reqwest::get(format!(
        "{}/swagger-ui/index.html?url=/documentation/openapi.json",
        base_url
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let page: String = resp.text().await.unwrap();
    assert!(page.contains("SwaggerUIBundle"));
}
