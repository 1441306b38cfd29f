//! Tier endpoints
//!
//! Lists tiers, their provider stacks, and the languages each one supports.
//! Language lookups never fail: an unknown tier resolves to the universal
//! subset, the same as the library calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::metrics;
use crate::{
    error::{AppError, AppResult},
    tiers::{LanguageOption, Tier, TierProfile},
    AppState,
};

/// A tier's profile plus how many languages it supports
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TierSummary {
    #[serde(flatten)]
    pub profile: TierProfile,
    pub language_count: usize,
}

/// All tiers, cheapest first
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TiersResponse {
    pub tiers: Vec<TierSummary>,
}

/// Languages available on a tier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TierLanguagesResponse {
    /// Tier identifier as requested
    pub tier: String,
    /// False when the identifier was not a known tier and the universal
    /// subset was returned instead
    pub tier_recognized: bool,
    pub languages: Vec<LanguageOption>,
}

/// Whether one language is usable on a tier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LanguageValidityResponse {
    pub code: String,
    pub tier: String,
    pub valid: bool,
    /// Language the wizard should use on this tier
    pub resolved_language: String,
    /// Provider-specific code for this tier, null when the tier defines none
    pub auxiliary_code: Option<String>,
}

fn summary(state: &AppState, tier: Tier) -> TierSummary {
    TierSummary {
        profile: *tier.profile(),
        language_count: state.table.options(tier).len(),
    }
}

/// List every tier
#[utoipa::path(
    get,
    path = "/v1/tiers",
    tag = "Tiers",
    responses((status = 200, description = "Success", body = TiersResponse))
)]
pub async fn list_tiers(State(state): State<Arc<AppState>>) -> Json<TiersResponse> {
    metrics::record_request("list_tiers");
    let tiers = Tier::ALL
        .into_iter()
        .map(|tier| summary(&state, tier))
        .collect();
    Json(TiersResponse { tiers })
}

/// Get one tier's profile
#[utoipa::path(
    get,
    path = "/v1/tiers/{tier}",
    tag = "Tiers",
    params(("tier" = String, Path, description = "Tier identifier: budget, balanced or premium")),
    responses(
        (status = 200, description = "Success", body = TierSummary),
        (status = 404, description = "Unknown tier", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_tier(
    State(state): State<Arc<AppState>>,
    Path(tier): Path<String>,
) -> AppResult<Json<TierSummary>> {
    metrics::record_request("get_tier");
    let parsed =
        Tier::parse(&tier).ok_or_else(|| AppError::NotFound(format!("Tier '{}'", tier)))?;
    Ok(Json(summary(&state, parsed)))
}

/// Languages supported by a tier, sorted by display name
#[utoipa::path(
    get,
    path = "/v1/tiers/{tier}/languages",
    tag = "Tiers",
    params(("tier" = String, Path, description = "Tier identifier; unknown values resolve to the universal subset")),
    responses((status = 200, description = "Success", body = TierLanguagesResponse))
)]
pub async fn tier_languages(
    State(state): State<Arc<AppState>>,
    Path(tier): Path<String>,
) -> Json<TierLanguagesResponse> {
    metrics::record_request("tier_languages");
    let tier_recognized = Tier::parse(&tier).is_some();
    if !tier_recognized {
        debug!(tier = %tier, "Unknown tier, serving universal languages");
    }

    Json(TierLanguagesResponse {
        languages: state.table.options_for_tier(&tier).to_vec(),
        tier,
        tier_recognized,
    })
}

/// Check whether a language is usable on a tier
#[utoipa::path(
    get,
    path = "/v1/tiers/{tier}/languages/{code}",
    tag = "Tiers",
    params(
        ("tier" = String, Path, description = "Tier identifier"),
        ("code" = String, Path, description = "Language code, e.g. en-US")
    ),
    responses((status = 200, description = "Success", body = LanguageValidityResponse))
)]
pub async fn check_language(
    State(state): State<Arc<AppState>>,
    Path((tier, code)): Path<(String, String)>,
) -> Json<LanguageValidityResponse> {
    metrics::record_request("check_language");
    let table = &state.table;

    let valid = table.is_valid_for_tier(&code, &tier);
    let resolved_language = table.fallback_for(&code, &tier).to_string();
    let auxiliary_code = Tier::parse(&tier)
        .filter(|_| valid)
        .and_then(|parsed| table.auxiliary_code_for_tier(&code, parsed))
        .map(str::to_string);

    Json(LanguageValidityResponse {
        code,
        tier,
        valid,
        resolved_language,
        auxiliary_code,
    })
}
