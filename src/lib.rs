//! Tiergate - tier capability resolver for voice agents
//!
//! This library decides which spoken languages each pricing tier supports
//! and keeps an agent's language valid when its tier changes. The `routes`
//! module exposes the same resolver over HTTP for the dashboard wizard.

pub mod config;
pub mod docs;
pub mod error;
pub mod routes;
pub mod tiers;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::tiers::{CapabilityTable, Selection, Tier, TierChange, DEFAULT_LANGUAGE};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Immutable tier -> language table, shared without locking
    pub table: Arc<CapabilityTable>,
}

impl AppState {
    /// Create a new application state, loading and validating the catalog
    pub fn new(config: Config) -> Result<Self> {
        let table = match &config.catalog_path {
            Some(path) => {
                info!(path = %path.display(), "Loading language catalog override");
                let definition = tiers::CatalogDefinition::from_json_file(path)?;
                let table = CapabilityTable::build(definition)
                    .with_context(|| format!("Invalid catalog in {}", path.display()))?;
                Arc::new(table)
            }
            None => tiers::builtin().context("Built-in language catalog is invalid")?,
        };

        Ok(Self::with_table(config, table))
    }

    /// Create an application state around an already-built table
    pub fn with_table(config: Config, table: impl Into<Arc<CapabilityTable>>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            table: table.into(),
        }
    }

    /// Create a new application state for testing with the built-in catalog
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing() -> Self {
        let table = tiers::builtin().expect("built-in catalog must be valid");
        Self::with_table(Config::default(), table)
    }
}
