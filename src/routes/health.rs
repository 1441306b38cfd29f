//! Health check endpoints
//!
//! Provides endpoints for monitoring and container orchestration:
//! - `/health` - Full health check with catalog stats
//! - `/health/ready` - Readiness probe
//! - `/health/live` - Liveness probe

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    tiers::{Tier, DEFAULT_LANGUAGE},
    AppState,
};

/// Health status enum
///
/// The catalog is validated before the server binds, so a running process
/// is always healthy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Language counts for the loaded catalog
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogStats {
    pub languages: usize,
    pub universal: usize,
    pub budget: usize,
    pub balanced: usize,
    pub premium: usize,
    pub default_language: String,
}

/// Full health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    pub catalog: CatalogStats,
}

/// Simple health response for liveness/readiness
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimpleHealthResponse {
    pub status: HealthStatus,
}

/// Full health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let table = &state.table;

    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        catalog: CatalogStats {
            languages: table.catalog().len(),
            universal: table.universal().len(),
            budget: table.options(Tier::Budget).len(),
            balanced: table.options(Tier::Balanced).len(),
            premium: table.options(Tier::Premium).len(),
            default_language: DEFAULT_LANGUAGE.to_string(),
        },
    })
}

/// Readiness probe endpoint
///
/// Ready as soon as the router is serving; the table is built before bind.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses((status = 200, description = "Ready", body = SimpleHealthResponse))
)]
pub async fn readiness_check() -> Json<SimpleHealthResponse> {
    Json(SimpleHealthResponse {
        status: HealthStatus::Healthy,
    })
}

/// Liveness probe endpoint
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses((status = 200, description = "Success", body = SimpleHealthResponse))
)]
pub async fn liveness_check() -> Json<SimpleHealthResponse> {
    Json(SimpleHealthResponse {
        status: HealthStatus::Healthy,
    })
}
