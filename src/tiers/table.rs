//! Capability table and selection validation
//!
//! The table is built once from a `CatalogDefinition` and never mutated.
//! Every lookup is total: unknown tiers resolve to the universal subset and
//! unknown language codes are simply not valid anywhere.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::{info, warn};

use super::catalog::{CatalogDefinition, CatalogError};
use super::types::{display_order, LanguageOption, Tier, DEFAULT_LANGUAGE};

/// Languages resolved for a single tier
#[derive(Debug, Clone)]
struct TierLanguages {
    /// Sorted by display name, one entry per code
    options: Vec<LanguageOption>,
    codes: HashSet<String>,
}

/// Immutable tier -> language capability table
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    catalog: Vec<LanguageOption>,
    universal: TierLanguages,
    tiers: BTreeMap<Tier, TierLanguages>,
    auxiliary_codes: BTreeMap<Tier, HashMap<String, String>>,
}

impl CapabilityTable {
    /// Validate a catalog definition and resolve every tier's language list.
    pub fn build(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let mut names: HashMap<&str, &str> = HashMap::new();
        for entry in &definition.languages {
            if entry.code.trim().is_empty() || entry.display_name.trim().is_empty() {
                return Err(CatalogError::EmptyEntry);
            }
            if names
                .insert(entry.code.as_str(), entry.display_name.as_str())
                .is_some()
            {
                return Err(CatalogError::DuplicateCode(entry.code.clone()));
            }
        }

        let check_known = |context: &str, code: &str| -> Result<(), CatalogError> {
            if names.contains_key(code) {
                Ok(())
            } else {
                Err(CatalogError::UnknownCode {
                    context: context.to_string(),
                    code: code.to_string(),
                })
            }
        };

        for code in &definition.universal {
            check_known("universal subset", code)?;
        }
        for (tier, codes) in &definition.additions {
            for code in codes {
                check_known(&format!("{} additions", tier), code)?;
            }
        }
        for (tier, codes) in &definition.auxiliary_codes {
            for code in codes.keys() {
                check_known(&format!("{} auxiliary codes", tier), code)?;
            }
        }

        let universal_codes: BTreeSet<&str> =
            definition.universal.iter().map(String::as_str).collect();

        if !universal_codes.contains(DEFAULT_LANGUAGE) {
            return Err(CatalogError::DefaultNotUniversal(
                DEFAULT_LANGUAGE.to_string(),
            ));
        }

        // A code every tier adds would widen the intersection beyond the
        // declared universal subset.
        let mut added_by_every_tier: Option<BTreeSet<&str>> = None;
        for tier in Tier::ALL {
            let added: BTreeSet<&str> = definition
                .additions_for(tier)
                .iter()
                .map(String::as_str)
                .filter(|code| !universal_codes.contains(code))
                .collect();
            added_by_every_tier = Some(match added_by_every_tier {
                None => added,
                Some(previous) => previous.intersection(&added).copied().collect(),
            });
        }
        if let Some(code) = added_by_every_tier
            .and_then(|codes| codes.into_iter().next())
        {
            return Err(CatalogError::ImplicitUniversal(code.to_string()));
        }

        for tier in Tier::ALL {
            for code in definition.additions_for(tier) {
                if universal_codes.contains(code.as_str()) {
                    warn!(tier = %tier, code = %code, "Tier addition is already universal");
                }
            }
        }

        let option = |code: &str| LanguageOption::new(code, names[code]);

        let universal = resolve(universal_codes.iter().map(|code| option(*code)));

        let mut auxiliary_codes = BTreeMap::new();
        let mut tiers = BTreeMap::new();
        for tier in Tier::ALL {
            let supported: BTreeSet<&str> = universal_codes
                .iter()
                .copied()
                .chain(definition.additions_for(tier).iter().map(String::as_str))
                .collect();

            let tier_aux: HashMap<String, String> = definition
                .auxiliary_codes
                .get(&tier)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .collect();
            if let Some(code) = tier_aux
                .keys()
                .find(|code| !supported.contains(code.as_str()))
            {
                return Err(CatalogError::AuxiliaryWithoutSupport {
                    tier,
                    code: code.clone(),
                });
            }

            let languages = resolve(supported.iter().map(|code| {
                option(*code).with_auxiliary_code(tier_aux.get(*code).cloned())
            }));
            tiers.insert(tier, languages);
            if !tier_aux.is_empty() {
                auxiliary_codes.insert(tier, tier_aux);
            }
        }

        let mut catalog: Vec<LanguageOption> = definition
            .languages
            .iter()
            .map(|entry| LanguageOption::new(&entry.code, &entry.display_name))
            .collect();
        catalog.sort_by(display_order);

        let table = Self {
            catalog,
            universal,
            tiers,
            auxiliary_codes,
        };

        info!(
            languages = table.catalog.len(),
            universal = table.universal.options.len(),
            budget = table.options(Tier::Budget).len(),
            balanced = table.options(Tier::Balanced).len(),
            premium = table.options(Tier::Premium).len(),
            "Capability table built"
        );

        Ok(table)
    }

    /// Table for the compiled-in catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::build(CatalogDefinition::builtin())
    }

    /// Languages supported by a tier, sorted by display name
    pub fn options(&self, tier: Tier) -> &[LanguageOption] {
        self.resolved(tier)
            .map(|languages| languages.options.as_slice())
            .unwrap_or(self.universal.options.as_slice())
    }

    /// Languages supported by a tier identifier.
    ///
    /// An unrecognized identifier yields the universal subset.
    pub fn options_for_tier(&self, tier: &str) -> &[LanguageOption] {
        match Tier::parse(tier) {
            Some(tier) => self.options(tier),
            None => self.universal(),
        }
    }

    /// Languages supported by every tier, sorted by display name
    pub fn universal(&self) -> &[LanguageOption] {
        &self.universal.options
    }

    /// Every language in the catalog, sorted by display name
    pub fn catalog(&self) -> &[LanguageOption] {
        &self.catalog
    }

    /// Look up a catalog entry by code
    pub fn language(&self, code: &str) -> Option<&LanguageOption> {
        self.catalog.iter().find(|option| option.code == code)
    }

    /// Whether `code` is one of the universal languages
    pub fn is_universal(&self, code: &str) -> bool {
        self.universal.codes.contains(code)
    }

    /// Whether `code` is supported by a tier
    pub fn supports(&self, tier: Tier, code: &str) -> bool {
        self.resolved(tier)
            .map(|languages| languages.codes.contains(code))
            .unwrap_or_else(|| self.is_universal(code))
    }

    /// Whether `code` is supported by a tier identifier.
    ///
    /// An unrecognized identifier behaves like the universal subset.
    pub fn is_valid_for_tier(&self, code: &str, tier: &str) -> bool {
        match Tier::parse(tier) {
            Some(tier) => self.supports(tier, code),
            None => self.is_universal(code),
        }
    }

    /// Keep `current` if `tier` supports it, otherwise fall back to
    /// [`DEFAULT_LANGUAGE`].
    pub fn fallback<'a>(&self, current: &'a str, tier: Tier) -> &'a str {
        if self.supports(tier, current) {
            current
        } else {
            DEFAULT_LANGUAGE
        }
    }

    /// String-keyed variant of [`CapabilityTable::fallback`]
    pub fn fallback_for<'a>(&self, current: &'a str, tier: &str) -> &'a str {
        if self.is_valid_for_tier(current, tier) {
            current
        } else {
            DEFAULT_LANGUAGE
        }
    }

    /// First auxiliary code defined for `code`, scanning tiers in ascending
    /// order. `None` when no tier's provider defines one.
    pub fn auxiliary_code_for(&self, code: &str) -> Option<&str> {
        self.auxiliary_codes
            .values()
            .find_map(|codes| codes.get(code))
            .map(String::as_str)
    }

    /// Auxiliary code a specific tier's provider uses for `code`
    pub fn auxiliary_code_for_tier(&self, code: &str, tier: Tier) -> Option<&str> {
        self.auxiliary_codes
            .get(&tier)
            .and_then(|codes| codes.get(code))
            .map(String::as_str)
    }

    fn resolved(&self, tier: Tier) -> Option<&TierLanguages> {
        self.tiers.get(&tier)
    }
}

fn resolve(options: impl Iterator<Item = LanguageOption>) -> TierLanguages {
    let mut codes = HashSet::new();
    let mut options: Vec<LanguageOption> = options
        .filter(|option| codes.insert(option.code.clone()))
        .collect();
    options.sort_by(display_order);
    TierLanguages { options, codes }
}
