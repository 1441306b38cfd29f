//! Caller-owned tier + language selection
//!
//! The wizard keeps one `Selection` per form session and calls
//! `change_tier` whenever the tier picker changes. The returned
//! `TierChange` describes the single state update to apply.

use tracing::debug;

use super::table::CapabilityTable;
use super::types::Tier;

/// Tier and language currently chosen for an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    tier: Tier,
    language: String,
}

/// Outcome of a tier change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierChange {
    /// Same tier as before, nothing to update
    Unchanged,
    /// Tier changed and the language is still supported
    TierOnly,
    /// Tier changed and the language had to be replaced
    LanguageReset { from: String, to: String },
}

impl Selection {
    /// Create a selection, replacing the language if the tier cannot serve it.
    pub fn new(table: &CapabilityTable, tier: Tier, language: impl Into<String>) -> Self {
        let language = language.into();
        let language = table.fallback(&language, tier).to_string();
        Self { tier, language }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Move the selection to `new_tier`, falling back at most once.
    pub fn change_tier(&mut self, table: &CapabilityTable, new_tier: Tier) -> TierChange {
        if new_tier == self.tier {
            return TierChange::Unchanged;
        }

        let previous_tier = self.tier;
        self.tier = new_tier;

        let resolved = table.fallback(&self.language, new_tier);
        if resolved == self.language {
            debug!(from = %previous_tier, to = %new_tier, language = %self.language, "Tier changed");
            return TierChange::TierOnly;
        }

        let to = resolved.to_string();
        let from = std::mem::replace(&mut self.language, to.clone());
        debug!(
            from_tier = %previous_tier,
            to_tier = %new_tier,
            from_language = %from,
            to_language = %to,
            "Language not supported by new tier, falling back"
        );
        TierChange::LanguageReset { from, to }
    }
}
