//! tests/global_errors/408.rs
//! Ensures that requests taking longer than the request timeout result in a 408.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::timeout;

use crate::common::{self, StubBehavior, StubBooks};
use service_api::config::environment::EnvironmentVariables;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let env = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    };
    let slow_books = StubBooks::new(StubBehavior::Sleep(Duration::from_secs(5)));
    let base_url: String = common::spawn_app_with(env, Arc::new(slow_books)).await;

    let resp_result = timeout(
        Duration::from_secs(4), // client-side timeout duration
        reqwest::get(format!("{}/hello/with-call", base_url)),
    )
    .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["code"], 1000);
    assert!(json["message"].as_str().unwrap().starts_with("Request timeout"));
}
