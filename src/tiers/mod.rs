//! Tier capability resolution
//!
//! Maps pricing tiers to the spoken languages their providers support and
//! keeps a chosen language valid when the tier changes.

pub mod catalog;
pub mod profile;
pub mod selection;
pub mod table;
pub mod types;

use std::sync::Arc;

use once_cell::sync::OnceCell;

pub use catalog::{CatalogDefinition, CatalogError};
pub use profile::{ProviderModel, TierProfile};
pub use selection::{Selection, TierChange};
pub use table::CapabilityTable;
pub use types::{LanguageOption, Tier, UnknownTier, DEFAULT_LANGUAGE};

static BUILTIN: OnceCell<Arc<CapabilityTable>> = OnceCell::new();

/// Process-wide table for the compiled-in catalog, built on first use.
///
/// Every caller shares the same allocation.
pub fn builtin() -> Result<Arc<CapabilityTable>, CatalogError> {
    BUILTIN
        .get_or_try_init(|| CapabilityTable::builtin().map(Arc::new))
        .map(Arc::clone)
}
