//! Language catalog definitions
//!
//! A `CatalogDefinition` is the raw, serde-friendly description of which
//! languages exist and which tier supports them. It is turned into a
//! validated `CapabilityTable` by `CapabilityTable::build`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Tier;

/// Languages supported by every tier.
const UNIVERSAL_LANGUAGES: &[(&str, &str)] = &[
    ("en-US", "English (US)"),
    ("en-GB", "English (UK)"),
    ("en-AU", "English (Australia)"),
    ("es-ES", "Spanish (Spain)"),
    ("es-MX", "Spanish (Mexico)"),
    ("fr-FR", "French (France)"),
    ("de-DE", "German"),
    ("it-IT", "Italian"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("nl-NL", "Dutch"),
    ("ja-JP", "Japanese"),
    ("hi-IN", "Hindi"),
];

/// Languages added by the balanced tier's speech providers.
const BALANCED_LANGUAGES: &[(&str, &str)] = &[
    ("en-IN", "English (India)"),
    ("fr-CA", "French (Canada)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ko-KR", "Korean"),
    ("zh-CN", "Chinese (Mandarin)"),
    ("ru-RU", "Russian"),
    ("pl-PL", "Polish"),
    ("sv-SE", "Swedish"),
    ("tr-TR", "Turkish"),
];

/// Languages only the premium realtime provider handles.
const PREMIUM_ONLY_LANGUAGES: &[(&str, &str)] = &[
    ("ar-SA", "Arabic"),
    ("cs-CZ", "Czech"),
    ("da-DK", "Danish"),
    ("el-GR", "Greek"),
    ("fi-FI", "Finnish"),
    ("fil-PH", "Filipino"),
    ("he-IL", "Hebrew"),
    ("hu-HU", "Hungarian"),
    ("id-ID", "Indonesian"),
    ("ms-MY", "Malay"),
    ("nb-NO", "Norwegian"),
    ("ro-RO", "Romanian"),
    ("ta-IN", "Tamil"),
    ("th-TH", "Thai"),
    ("uk-UA", "Ukrainian"),
    ("vi-VN", "Vietnamese"),
];

/// One entry of the language catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub display_name: String,
}

/// Raw catalog description, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    /// Every language known to the platform
    pub languages: Vec<LanguageEntry>,
    /// Codes supported by every tier
    pub universal: Vec<String>,
    /// Codes each tier adds on top of the universal subset
    #[serde(default)]
    pub additions: BTreeMap<Tier, Vec<String>>,
    /// Provider-specific codes per tier, keyed by language code
    #[serde(default)]
    pub auxiliary_codes: BTreeMap<Tier, BTreeMap<String, String>>,
}

impl CatalogDefinition {
    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        let entries = |table: &[(&str, &str)]| -> Vec<LanguageEntry> {
            table
                .iter()
                .map(|(code, name)| LanguageEntry {
                    code: (*code).to_string(),
                    display_name: (*name).to_string(),
                })
                .collect()
        };
        let codes = |table: &[(&str, &str)]| -> Vec<String> {
            table.iter().map(|(code, _)| (*code).to_string()).collect()
        };

        let mut languages = entries(UNIVERSAL_LANGUAGES);
        languages.extend(entries(BALANCED_LANGUAGES));
        languages.extend(entries(PREMIUM_ONLY_LANGUAGES));

        // Premium repeats the balanced additions; the table de-duplicates.
        let mut premium = codes(BALANCED_LANGUAGES);
        premium.extend(codes(PREMIUM_ONLY_LANGUAGES));

        let mut additions = BTreeMap::new();
        additions.insert(Tier::Budget, Vec::new());
        additions.insert(Tier::Balanced, codes(BALANCED_LANGUAGES));
        additions.insert(Tier::Premium, premium);

        // The realtime provider takes ISO-639-1 codes rather than full tags.
        let realtime_codes = languages
            .iter()
            .filter_map(|entry| {
                let primary = entry.code.split('-').next()?;
                let short = match primary {
                    "fil" => "tl",
                    "nb" => "no",
                    other => other,
                };
                Some((entry.code.clone(), short.to_string()))
            })
            .collect::<BTreeMap<_, _>>();

        let mut auxiliary_codes = BTreeMap::new();
        auxiliary_codes.insert(Tier::Premium, realtime_codes);

        Self {
            languages,
            universal: codes(UNIVERSAL_LANGUAGES),
            additions,
            auxiliary_codes,
        }
    }

    /// Load a catalog override from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Codes a tier adds on top of the universal subset
    pub fn additions_for(&self, tier: Tier) -> &[String] {
        self.additions.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Reasons a catalog cannot be turned into a capability table
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("language entry with empty code or display name")]
    EmptyEntry,

    #[error("language code '{0}' is listed more than once")]
    DuplicateCode(String),

    #[error("{context} references unknown language code '{code}'")]
    UnknownCode { context: String, code: String },

    #[error("default language '{0}' is not in the universal subset")]
    DefaultNotUniversal(String),

    #[error("language '{0}' is added by every tier but is not declared universal")]
    ImplicitUniversal(String),

    #[error("tier {tier} defines an auxiliary code for '{code}' which it does not support")]
    AuxiliaryWithoutSupport { tier: Tier, code: String },
}
