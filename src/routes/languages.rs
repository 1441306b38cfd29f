//! Language catalog endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::metrics;
use crate::{
    tiers::{LanguageOption, DEFAULT_LANGUAGE},
    AppState,
};

/// Full language catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    /// Every known language, sorted by display name
    pub languages: Vec<LanguageOption>,
    /// Codes every tier supports
    pub universal: Vec<String>,
    /// Language substituted when a selection stops being valid
    pub default_language: String,
}

/// Auxiliary code lookup result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuxiliaryCodeResponse {
    pub code: String,
    /// Whether the code exists in the catalog at all
    pub known: bool,
    /// First provider-specific code any tier defines, or null
    pub auxiliary_code: Option<String>,
}

/// List the whole language catalog
#[utoipa::path(
    get,
    path = "/v1/languages",
    tag = "Languages",
    responses((status = 200, description = "Success", body = CatalogResponse))
)]
pub async fn list_languages(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    metrics::record_request("list_languages");
    let table = &state.table;
    Json(CatalogResponse {
        languages: table.catalog().to_vec(),
        universal: table.universal().iter().map(|o| o.code.clone()).collect(),
        default_language: DEFAULT_LANGUAGE.to_string(),
    })
}

/// Look up the provider-specific code for a language
#[utoipa::path(
    get,
    path = "/v1/languages/{code}/auxiliary-code",
    tag = "Languages",
    params(("code" = String, Path, description = "Language code, e.g. en-US")),
    responses((status = 200, description = "Success", body = AuxiliaryCodeResponse))
)]
pub async fn auxiliary_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Json<AuxiliaryCodeResponse> {
    metrics::record_request("auxiliary_code");
    let table = &state.table;
    Json(AuxiliaryCodeResponse {
        known: table.language(&code).is_some(),
        auxiliary_code: table.auxiliary_code_for(&code).map(str::to_string),
        code,
    })
}
