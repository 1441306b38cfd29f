//! Tier endpoint integration tests
//!
//! - GET /v1/tiers
//! - GET /v1/tiers/:tier
//! - GET /v1/tiers/:tier/languages
//! - GET /v1/tiers/:tier/languages/:code

use std::collections::BTreeSet;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{codes, test_server};

#[tokio::test]
async fn test_list_tiers() {
    let server = test_server();

    let response = server.get("/v1/tiers").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let tiers = body["tiers"].as_array().unwrap();
    let names: Vec<&str> = tiers.iter().map(|t| t["tier"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["budget", "balanced", "premium"]);

    let realtime: Vec<bool> = tiers
        .iter()
        .map(|t| t["supports_realtime"].as_bool().unwrap())
        .collect();
    assert_eq!(realtime, vec![false, false, true]);
    assert_eq!(tiers[2]["default_voice"], "shimmer");
}

#[tokio::test]
async fn test_get_tier_profile() {
    let server = test_server();

    let response = server.get("/v1/tiers/balanced").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["tier"], "balanced");
    assert_eq!(body["tts"]["provider"], "elevenlabs");
    assert!(body["language_count"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_get_unknown_tier_is_404() {
    let server = test_server();

    let response = server.get("/v1/tiers/enterprise").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_tier_languages_sorted_and_unique() {
    let server = test_server();

    for tier in ["budget", "balanced", "premium"] {
        let body: Value = server.get(&format!("/v1/tiers/{}/languages", tier)).await.json();
        assert_eq!(body["tier_recognized"], true);

        let languages = body["languages"].as_array().unwrap();
        let names: Vec<String> = languages
            .iter()
            .map(|l| l["display_name"].as_str().unwrap().to_lowercase())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted, "{} not sorted", tier);

        let list = codes(&body["languages"]);
        let unique: BTreeSet<&String> = list.iter().collect();
        assert_eq!(unique.len(), list.len(), "{} has duplicates", tier);
    }
}

#[tokio::test]
async fn test_intersection_of_tiers_is_universal() {
    let server = test_server();

    let mut intersection: Option<BTreeSet<String>> = None;
    for tier in ["budget", "balanced", "premium"] {
        let body: Value = server.get(&format!("/v1/tiers/{}/languages", tier)).await.json();
        let set: BTreeSet<String> = codes(&body["languages"]).into_iter().collect();
        intersection = Some(match intersection {
            None => set,
            Some(previous) => previous.intersection(&set).cloned().collect(),
        });
    }

    let catalog: Value = server.get("/v1/languages").await.json();
    let universal: BTreeSet<String> = catalog["universal"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect();

    assert_eq!(intersection.unwrap(), universal);
}

#[tokio::test]
async fn test_unknown_tier_languages_fall_back_to_universal() {
    let server = test_server();

    let unknown: Value = server.get("/v1/tiers/gold/languages").await.json();
    let budget: Value = server.get("/v1/tiers/budget/languages").await.json();

    assert_eq!(unknown["tier"], "gold");
    assert_eq!(unknown["tier_recognized"], false);
    assert_eq!(codes(&unknown["languages"]), codes(&budget["languages"]));
}

#[tokio::test]
async fn test_premium_languages_carry_auxiliary_codes() {
    let server = test_server();

    let premium: Value = server.get("/v1/tiers/premium/languages").await.json();
    let english = premium["languages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["code"] == "en-US")
        .unwrap();
    assert_eq!(english["auxiliary_code"], "en");

    let budget: Value = server.get("/v1/tiers/budget/languages").await.json();
    assert!(budget["languages"]
        .as_array()
        .unwrap()
        .iter()
        .all(|l| l.get("auxiliary_code").is_none()));
}

#[tokio::test]
async fn test_check_language_validity() {
    let server = test_server();

    let body: Value = server.get("/v1/tiers/balanced/languages/ko-KR").await.json();
    assert_eq!(body["valid"], true);
    assert_eq!(body["resolved_language"], "ko-KR");
    assert!(body["auxiliary_code"].is_null());

    let body: Value = server.get("/v1/tiers/budget/languages/ko-KR").await.json();
    assert_eq!(body["valid"], false);
    assert_eq!(body["resolved_language"], "en-US");
}

#[tokio::test]
async fn test_tier_identifiers_are_case_sensitive() {
    let server = test_server();

    server
        .get("/v1/tiers/Premium")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server.get("/v1/tiers/PREMIUM/languages").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tier_recognized"], false);

    let universal: Value = server.get("/v1/tiers/budget/languages").await.json();
    assert_eq!(codes(&body["languages"]), codes(&universal["languages"]));
}
