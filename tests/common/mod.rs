//! Common test utilities for Tiergate
//!
//! Shared fixtures used across the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};
use tiergate::{routes::create_router, AppState, CapabilityTable, Config};

/// Server over the real router with the built-in catalog
pub fn test_server() -> TestServer {
    server_for(AppState::new_for_testing())
}

/// Server over the real router with a custom state
pub fn server_for(state: AppState) -> TestServer {
    let app = create_router(Arc::new(state));
    TestServer::new(app).expect("Failed to create test server")
}

/// State with a docs key configured
pub fn state_with_docs_key(key: &str) -> AppState {
    let config = Config {
        docs_api_key: Some(key.to_string()),
        ..Config::default()
    };
    AppState::with_table(config, CapabilityTable::builtin().unwrap())
}

/// A small catalog with one language per tier layer
pub fn small_catalog_json() -> Value {
    json!({
        "languages": [
            {"code": "en-US", "display_name": "English (US)"},
            {"code": "es-ES", "display_name": "Spanish (Spain)"},
            {"code": "ko-KR", "display_name": "Korean"},
            {"code": "sw-KE", "display_name": "Swahili"}
        ],
        "universal": ["en-US", "es-ES"],
        "additions": {
            "balanced": ["ko-KR"],
            "premium": ["ko-KR", "sw-KE"]
        },
        "auxiliary_codes": {
            "premium": {"sw-KE": "sw", "ko-KR": "ko"}
        }
    })
}

/// Codes of a language list response, in order
pub fn codes(languages: &Value) -> Vec<String> {
    languages
        .as_array()
        .expect("languages must be an array")
        .iter()
        .map(|l| l["code"].as_str().unwrap().to_string())
        .collect()
}
