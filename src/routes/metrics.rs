//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

use crate::tiers::{CapabilityTable, Tier};

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "tiergate_requests_total",
        "Total number of capability requests processed"
    );
    metrics::describe_counter!(
        "tiergate_resolutions_total",
        "Language resolutions by tier and outcome (kept or fallback)"
    );
    metrics::describe_gauge!(
        "tiergate_catalog_languages",
        "Number of languages supported, per tier"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a handled request
pub fn record_request(endpoint: &'static str) {
    metrics::counter!("tiergate_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record the outcome of a language resolution
pub fn record_resolution(tier: &str, fallback_applied: bool) {
    let outcome = if fallback_applied { "fallback" } else { "kept" };
    metrics::counter!(
        "tiergate_resolutions_total",
        "tier" => tier.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Publish per-tier language counts
pub fn record_catalog(table: &CapabilityTable) {
    for tier in Tier::ALL {
        metrics::gauge!("tiergate_catalog_languages", "tier" => tier.as_str())
            .set(table.options(tier).len() as f64);
    }
}
