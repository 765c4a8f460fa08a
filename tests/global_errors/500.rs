//! tests/global_errors/500.rs
//! Ensures that a panic inside a handler becomes a 500 with the generic code.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common::{self, StubBehavior, StubBooks};

#[tokio::test]
async fn returns_500_when_handler_panics() {
    let base_url: String = common::spawn_app(StubBooks::new(StubBehavior::Panic)).await;

    let resp: reqwest::Response = reqwest::get(format!("{}/hello/with-call", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 1000);
    assert_eq!(json["message"], "books stub exploded");

    // * The server keeps serving after a panic
    let health: reqwest::Response = reqwest::get(format!("{}/-/healthz", base_url)).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}
