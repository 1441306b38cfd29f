//! HTTP routes for Tiergate
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod docs;
pub mod health;
pub mod languages;
pub mod metrics;
pub mod selections;
pub mod tiers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // The dashboard is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/v1/tiers", get(tiers::list_tiers))
        .route("/v1/tiers/:tier", get(tiers::get_tier))
        .route("/v1/tiers/:tier/languages", get(tiers::tier_languages))
        .route("/v1/tiers/:tier/languages/:code", get(tiers::check_language))
        .route("/v1/languages", get(languages::list_languages))
        .route(
            "/v1/languages/:code/auxiliary-code",
            get(languages::auxiliary_code),
        )
        .route("/v1/selections/resolve", post(selections::resolve_selection));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .merge(docs::create_docs_router(state.config.docs_api_key.clone()))
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
