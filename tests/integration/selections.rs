//! Selection fallback integration tests
//!
//! - POST /v1/selections/resolve

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::test_server;

#[tokio::test]
async fn test_budget_replaces_premium_only_language() {
    let server = test_server();

    let response = server
        .post("/v1/selections/resolve")
        .json(&json!({"language": "uk-UA", "tier": "budget"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["language"], "en-US");
    assert_eq!(body["fallback_applied"], true);
    assert_eq!(body["previous_language"], "uk-UA");
}

#[tokio::test]
async fn test_premium_keeps_any_catalog_language() {
    let server = test_server();
    let catalog: Value = server.get("/v1/languages").await.json();

    for language in catalog["languages"].as_array().unwrap() {
        let code = language["code"].as_str().unwrap();
        let body: Value = server
            .post("/v1/selections/resolve")
            .json(&json!({"language": code, "tier": "premium"}))
            .await
            .json();
        assert_eq!(body["language"], code);
        assert_eq!(body["fallback_applied"], false);
        assert!(body["previous_language"].is_null());
    }
}

#[tokio::test]
async fn test_resolving_the_result_again_is_stable() {
    let server = test_server();

    let first: Value = server
        .post("/v1/selections/resolve")
        .json(&json!({"language": "ru-RU", "tier": "budget"}))
        .await
        .json();
    let second: Value = server
        .post("/v1/selections/resolve")
        .json(&json!({"language": first["language"], "tier": "budget"}))
        .await
        .json();

    assert_eq!(second["language"], first["language"]);
    assert_eq!(second["fallback_applied"], false);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/v1/selections/resolve")
        .json(&json!({"language": "en-US"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
