//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns HTTP 404 with the error body.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app(common::StubBooks::returning(&[])).await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json,
        json!({ "code": 1000, "message": "Resource not found: /does-not-exist" })
    );
}
