//! OpenAPI specification for the Tiergate API
//!
//! Aggregates all endpoints and schemas into a single OpenAPI document.

use utoipa::OpenApi;

use crate::{
    error::{ErrorBody, ErrorResponse},
    routes::{
        health::{CatalogStats, HealthResponse, HealthStatus, SimpleHealthResponse},
        languages::{AuxiliaryCodeResponse, CatalogResponse},
        selections::{ResolveSelectionRequest, ResolveSelectionResponse},
        tiers::{LanguageValidityResponse, TierLanguagesResponse, TierSummary, TiersResponse},
    },
    tiers::{LanguageOption, ProviderModel, Tier, TierProfile},
};

/// OpenAPI specification for the Tiergate API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tiergate API",
        version = "1.0.0",
        description = "Tier capability resolution for voice agents: which languages each pricing tier supports, and what to fall back to when the tier changes"
    ),
    paths(
        crate::routes::tiers::list_tiers,
        crate::routes::tiers::get_tier,
        crate::routes::tiers::tier_languages,
        crate::routes::tiers::check_language,
        crate::routes::languages::list_languages,
        crate::routes::languages::auxiliary_code,
        crate::routes::selections::resolve_selection,
        crate::routes::health::health_check,
        crate::routes::health::readiness_check,
        crate::routes::health::liveness_check,
    ),
    components(
        schemas(
            // Types
            Tier,
            LanguageOption,
            ProviderModel,
            TierProfile,
            // Responses
            TierSummary,
            TiersResponse,
            TierLanguagesResponse,
            LanguageValidityResponse,
            CatalogResponse,
            AuxiliaryCodeResponse,
            ResolveSelectionRequest,
            ResolveSelectionResponse,
            HealthStatus,
            CatalogStats,
            HealthResponse,
            SimpleHealthResponse,
            // Error
            ErrorBody,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Tiers", description = "Tier profiles and tier-gated languages"),
        (name = "Languages", description = "Language catalog"),
        (name = "Selections", description = "Selection fallback on tier change"),
        (name = "Health", description = "Probes")
    )
)]
pub struct ApiDoc;
