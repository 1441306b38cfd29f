//! Health endpoint integration tests
//!
//! - GET /health - Full health check with catalog stats
//! - GET /health/ready - Readiness probe
//! - GET /health/live - Liveness probe
//! - GET /metrics - Prometheus text

use serde_json::Value;

use crate::common::test_server;

#[tokio::test]
async fn test_health_returns_catalog_stats() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["catalog"]["default_language"], "en-US");
    assert_eq!(body["catalog"]["budget"], body["catalog"]["universal"]);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_readiness_and_liveness() {
    let server = test_server();

    let ready = server.get("/health/ready").await;
    ready.assert_status_ok();
    assert_eq!(ready.json::<Value>()["status"], "healthy");

    let live = server.get("/health/live").await;
    live.assert_status_ok();
    assert_eq!(live.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_count_resolutions() {
    tiergate::routes::metrics::init_metrics();
    let server = test_server();

    server
        .post("/v1/selections/resolve")
        .json(&serde_json::json!({"language": "th-TH", "tier": "budget"}))
        .await
        .assert_status_ok();

    let response = server.get("/metrics").await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("tiergate_resolutions_total"));
    assert!(text.contains("outcome=\"fallback\""));
}
