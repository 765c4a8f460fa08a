//! tests/global_errors/413.rs
//! Ensures that a body above the configured limit triggers 413.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::common::{self, StubBooks};
use service_api::config::environment::EnvironmentVariables;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let env = EnvironmentVariables {
        max_request_body_size: 1024,
        ..EnvironmentVariables::default()
    };
    let base_url: String = common::spawn_app_with(env, Arc::new(StubBooks::returning(&[]))).await;

    // A valid JSON document, just too large.
    let oversized_payload: String = format!(
        r#"{{"name": "{}", "surname": "Doe"}}"#,
        "X".repeat(4096)
    );

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/hello/1234", base_url))
        .header("content-type", "application/json")
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 1000);
}
