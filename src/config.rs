//! Configuration management for Tiergate
//!
//! Configuration is loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Optional JSON catalog replacing the compiled-in one
    pub catalog_path: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,

    /// Key required in `X-Docs-Key` to read the API docs; open when unset
    pub docs_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("TIERGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("TIERGATE_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid TIERGATE_PORT")?,

            catalog_path: env::var("TIERGATE_CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),

            log_json: env::var("TIERGATE_LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),

            docs_api_key: env::var("DOCS_API_KEY").ok().filter(|key| !key.is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            catalog_path: None,
            log_json: false,
            docs_api_key: None,
        }
    }
}
