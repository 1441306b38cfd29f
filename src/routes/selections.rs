//! Selection resolution endpoint
//!
//! The wizard posts its current language and the tier it is switching to,
//! and writes the returned language back into its form state.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::metrics;
use crate::{error::AppResult, tiers::Tier, AppState};

/// Current selection and target tier
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolveSelectionRequest {
    /// Language currently selected in the form
    pub language: String,
    /// Tier being switched to
    pub tier: String,
}

/// Language to keep after the tier change
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolveSelectionResponse {
    pub language: String,
    pub tier: String,
    pub tier_recognized: bool,
    /// True when the requested language was replaced by the default
    pub fallback_applied: bool,
    /// The replaced language, set only when a fallback happened
    pub previous_language: Option<String>,
}

/// Resolve a selection against a (new) tier
#[utoipa::path(
    post,
    path = "/v1/selections/resolve",
    tag = "Selections",
    request_body = ResolveSelectionRequest,
    responses(
        (status = 200, description = "Success", body = ResolveSelectionResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse)
    )
)]
pub async fn resolve_selection(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ResolveSelectionRequest>, JsonRejection>,
) -> AppResult<Json<ResolveSelectionResponse>> {
    metrics::record_request("resolve_selection");
    let Json(request) = payload?;

    let language = state
        .table
        .fallback_for(&request.language, &request.tier)
        .to_string();
    let fallback_applied = language != request.language;
    let parsed = Tier::parse(&request.tier);
    let tier_recognized = parsed.is_some();

    metrics::record_resolution(
        parsed.map(|tier| tier.as_str()).unwrap_or("unknown"),
        fallback_applied,
    );

    if fallback_applied {
        info!(
            tier = %request.tier,
            from = %request.language,
            to = %language,
            "Selection fell back to default language"
        );
    }

    Ok(Json(ResolveSelectionResponse {
        previous_language: fallback_applied.then(|| request.language.clone()),
        language,
        tier: request.tier,
        tier_recognized,
        fallback_applied,
    }))
}
