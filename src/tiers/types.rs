//! Core tier and language types
//!
//! `Tier` is the closed set of pricing tiers an agent can run on.
//! `LanguageOption` is one selectable spoken language.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Language every tier must support; the target of every fallback.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Pricing tier of a voice agent
///
/// Ordered from cheapest to most capable: Budget < Balanced < Premium.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Lowest cost per minute, universal languages only
    Budget,
    /// Mid-range providers with a wider language set
    Balanced,
    /// Realtime speech-to-speech with the full language catalog
    Premium,
}

impl Tier {
    /// Every tier, in ascending order
    pub const ALL: [Tier; 3] = [Tier::Budget, Tier::Balanced, Tier::Premium];

    /// Identifier used on the wire and in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Budget => "budget",
            Tier::Balanced => "balanced",
            Tier::Premium => "premium",
        }
    }

    /// Parse a tier identifier, returning `None` for anything unrecognized.
    ///
    /// Matching is exact, the same as the serde form.
    pub fn parse(value: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Budget
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known tier identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier '{0}'")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::parse(s).ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// A selectable spoken language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LanguageOption {
    /// BCP-47 language tag, e.g. `en-US`
    pub code: String,
    /// Human-readable label shown in the wizard
    pub display_name: String,
    /// Provider-specific code for the tier this option was resolved for.
    ///
    /// Only set on options returned for a specific tier, and only when that
    /// tier's provider defines one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_code: Option<String>,
}

impl LanguageOption {
    /// Create an option without an auxiliary code
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            auxiliary_code: None,
        }
    }

    /// Attach a tier-specific auxiliary code
    pub fn with_auxiliary_code(mut self, auxiliary_code: Option<String>) -> Self {
        self.auxiliary_code = auxiliary_code;
        self
    }
}

/// Ordering used for every language list handed to callers.
///
/// Compares display names case-insensitively first so "english" and
/// "English" sort together, then case-sensitively, then by code so the
/// order is total and stable across runs.
pub fn display_order(a: &LanguageOption, b: &LanguageOption) -> Ordering {
    fold(&a.display_name)
        .cmp(&fold(&b.display_name))
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.code.cmp(&b.code))
}

fn fold(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}
