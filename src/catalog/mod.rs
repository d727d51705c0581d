//! Curated invasive-species knowledge base and the layered name matcher.
//!
//! The catalog is immutable process-wide state: build it once at startup and
//! share it freely — lookups take `&self` and no locking is needed. At the
//! current scale (dozens to low hundreds of entries) a linear scan is fast
//! enough; nothing in the layout precludes adding an index later.

mod data;

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::types::Severity;

/// One immutable catalog record, keyed by its canonical scientific name.
#[derive(Debug, Clone)]
pub struct SpeciesEntry {
    pub canonical_name: String,
    pub severity: Severity,
    pub reason: String,
    /// Scientific-name synonyms, canonical name included (varieties, older
    /// binomials, reclassifications).
    pub scientific_synonyms: Vec<String>,
    /// Common names in any language or script.
    pub common_names: Vec<String>,
}

impl SpeciesEntry {
    pub fn new(
        canonical_name: &str,
        severity: Severity,
        reason: &str,
        scientific_synonyms: &[&str],
        common_names: &[&str],
    ) -> Self {
        let mut synonyms: Vec<String> =
            scientific_synonyms.iter().map(|s| s.to_string()).collect();
        if !synonyms.iter().any(|s| s == canonical_name) {
            synonyms.insert(0, canonical_name.to_string());
        }
        Self {
            canonical_name: canonical_name.to_string(),
            severity,
            reason: reason.to_string(),
            scientific_synonyms: synonyms,
            common_names: common_names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Curation error detected when building a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Two entries share a canonical scientific name.
    DuplicateCanonicalName(String),
    /// A scientific synonym is claimed by two different entries, which would
    /// make containment matching ambiguous.
    AmbiguousSynonym {
        synonym: String,
        first: String,
        second: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateCanonicalName(name) => {
                write!(f, "duplicate canonical name in catalog: {}", name)
            }
            CatalogError::AmbiguousSynonym {
                synonym,
                first,
                second,
            } => write!(
                f,
                "scientific synonym '{}' is claimed by both '{}' and '{}'",
                synonym, first, second
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The curated knowledge base. Entry order is part of the contract: the
/// containment scans resolve overlaps to the first entry in insertion order.
#[derive(Debug)]
pub struct SpeciesCatalog {
    entries: Vec<SpeciesEntry>,
}

impl SpeciesCatalog {
    /// Build a catalog, running the load-time integrity checks: canonical
    /// names must be unique and no scientific synonym may belong to two
    /// entries. Overlapping *common* names do occur in curated data (regional
    /// names are reused across species) and are resolved by entry order, so
    /// they are logged rather than rejected.
    pub fn new(entries: Vec<SpeciesEntry>) -> Result<Self, CatalogError> {
        let mut seen_canonical: HashMap<String, usize> = HashMap::new();
        let mut seen_synonyms: HashMap<String, usize> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            if seen_canonical
                .insert(entry.canonical_name.clone(), idx)
                .is_some()
            {
                return Err(CatalogError::DuplicateCanonicalName(
                    entry.canonical_name.clone(),
                ));
            }
            for synonym in &entry.scientific_synonyms {
                let key = synonym.to_lowercase();
                if let Some(&other) = seen_synonyms.get(&key) {
                    return Err(CatalogError::AmbiguousSynonym {
                        synonym: synonym.clone(),
                        first: entries[other].canonical_name.clone(),
                        second: entry.canonical_name.clone(),
                    });
                }
                seen_synonyms.insert(key, idx);
            }
        }

        let mut seen_common: HashMap<&str, &str> = HashMap::new();
        for entry in &entries {
            for name in &entry.common_names {
                if let Some(first) = seen_common.get(name.as_str()) {
                    warn!(
                        alias = %name,
                        first = %first,
                        second = %entry.canonical_name,
                        "common-name alias shared between entries; first entry wins"
                    );
                } else {
                    seen_common.insert(name.as_str(), entry.canonical_name.as_str());
                }
            }
        }

        Ok(Self { entries })
    }

    /// The built-in curated catalog (aquatic plants, herbs, vines, woody
    /// plants, grasses, and other major invasives).
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::builtin_entries())
    }

    /// Resolve a `(common_name, scientific_name)` pair to a catalog entry.
    ///
    /// Layered strategy, first success wins, no ranking:
    /// 1. exact (case-sensitive) match of the trimmed scientific name against
    ///    a canonical name;
    /// 2. scan in entry order: any scientific synonym that is a
    ///    case-insensitive substring of the input scientific name;
    /// 3. scan in entry order: bidirectional common-name containment,
    ///    case-sensitive (aliases span scripts where case folding does not
    ///    apply).
    ///
    /// `None` means "not known to be invasive", never an error. At least one
    /// name must be non-empty after trimming or the lookup short-circuits.
    pub fn lookup(
        &self,
        common_name: Option<&str>,
        scientific_name: Option<&str>,
    ) -> Option<&SpeciesEntry> {
        let common = common_name.map(str::trim).unwrap_or("");
        let scientific = scientific_name.map(str::trim).unwrap_or("");

        if common.is_empty() && scientific.is_empty() {
            return None;
        }

        if !scientific.is_empty() {
            if let Some(entry) = self
                .entries
                .iter()
                .find(|e| e.canonical_name == scientific)
            {
                return Some(entry);
            }

            // Synonym drift and abbreviated or suffixed names from the
            // classifier ("Eichhornia crassipes (Mart.) Solms") land here.
            let scientific_lower = scientific.to_lowercase();
            if let Some(entry) = self.entries.iter().find(|e| {
                e.scientific_synonyms
                    .iter()
                    .any(|syn| scientific_lower.contains(&syn.to_lowercase()))
            }) {
                return Some(entry);
            }
        }

        if !common.is_empty() {
            if let Some(entry) = self.entries.iter().find(|e| {
                e.common_names
                    .iter()
                    .any(|alias| common.contains(alias.as_str()) || alias.contains(common))
            }) {
                return Some(entry);
            }
        }

        None
    }

    pub fn entries(&self) -> &[SpeciesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
