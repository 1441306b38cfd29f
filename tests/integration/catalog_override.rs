//! Catalog override integration tests
//!
//! Exercises `TIERGATE_CATALOG_PATH`-style loading through `AppState::new`.

use std::io::Write;

use serde_json::Value;
use tiergate::{AppState, Config};

use crate::common::{codes, server_for, small_catalog_json, state_with_docs_key};

fn write_catalog(json: &Value) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.to_string().as_bytes()).unwrap();
    file
}

fn config_for(file: &tempfile::NamedTempFile) -> Config {
    Config {
        catalog_path: Some(file.path().to_path_buf()),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_override_catalog_is_served() {
    let file = write_catalog(&small_catalog_json());
    let state = AppState::new(config_for(&file)).unwrap();
    let server = server_for(state);

    let budget: Value = server.get("/v1/tiers/budget/languages").await.json();
    assert_eq!(codes(&budget["languages"]), vec!["en-US", "es-ES"]);

    let premium: Value = server.get("/v1/tiers/premium/languages").await.json();
    assert_eq!(
        codes(&premium["languages"]),
        vec!["en-US", "ko-KR", "es-ES", "sw-KE"]
    );

    let aux: Value = server.get("/v1/languages/sw-KE/auxiliary-code").await.json();
    assert_eq!(aux["auxiliary_code"], "sw");
}

#[test]
fn test_override_without_default_language_fails_fast() {
    let mut catalog = small_catalog_json();
    catalog["universal"] = serde_json::json!(["es-ES"]);
    let file = write_catalog(&catalog);

    let err = AppState::new(config_for(&file)).err().unwrap();
    let message = format!("{:#}", err);
    assert!(message.contains("en-US"), "{}", message);
}

#[test]
fn test_override_with_unknown_code_fails_fast() {
    let mut catalog = small_catalog_json();
    catalog["additions"]["balanced"] = serde_json::json!(["zz-ZZ"]);
    let file = write_catalog(&catalog);

    assert!(AppState::new(config_for(&file)).is_err());
}

#[tokio::test]
async fn test_docs_key_protects_openapi() {
    let server = server_for(state_with_docs_key("docs-key"));

    server
        .get("/docs/openapi.json")
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);

    let response = server
        .get("/docs/openapi.json")
        .add_header(
            axum::http::HeaderName::from_static("x-docs-key"),
            axum::http::HeaderValue::from_static("docs-key"),
        )
        .await;
    response.assert_status_ok();
    let spec: Value = response.json();
    assert!(spec["paths"]["/v1/tiers"].is_object());
}
