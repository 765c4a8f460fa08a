//! tests/global_errors/405.rs
//! Ensures that a known path hit with the wrong method returns 405 with the error body.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common;

#[tokio::test]
async fn returns_405_for_wrong_method_on_existing_path() {
    let base_url: String = common::spawn_app(common::StubBooks::returning(&[])).await;

    let resp: reqwest::Response = reqwest::get(format!("{}/hello/abc", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({ "code": 1000, "message": "Method GET not allowed on /hello/abc" })
    );
}

#[tokio::test]
async fn returns_405_for_delete_on_probe() {
    let base_url: String = common::spawn_app(common::StubBooks::returning(&[])).await;

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/-/healthz", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 1000);
}
