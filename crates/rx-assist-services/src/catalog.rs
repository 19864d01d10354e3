//! Medication catalog search.
//!
//! Matching:
//! - Case-insensitive substring of the medication name ranks first
//! - Otherwise the best Jaro-Winkler similarity against a name word,
//!   kept when above [`FUZZY_MATCH_THRESHOLD`] (catches typos like "amoxicilin")

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::ServiceResult;

/// Maximum number of results returned by a search.
pub const MAX_SEARCH_RESULTS: usize = 20;

/// Minimum similarity for a typo-tolerant match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// A medication the prescriber can pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationCandidate {
    /// Catalog identifier, when the source has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// RxNorm concept id, when sourced from RxNorm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rxcui: Option<String>,
    /// Display name (e.g. "Amoxicillin 500mg capsule")
    pub name: String,
    /// Strength (e.g. "500mg")
    pub strength: Option<String>,
    /// Dose form (e.g. "capsule")
    pub form: Option<String>,
    /// Common dosing instructions
    pub common_dosing: Vec<String>,
    /// Controlled substance
    pub is_controlled: bool,
}

/// Source of medication candidates for a name query.
pub trait MedicationCatalog {
    /// Search by name. The query has already been validated.
    fn search(&self, query: &str) -> ServiceResult<Vec<MedicationCandidate>>;
}

/// A formulary entry. Dosing is curated per item, not inferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub strength: String,
    pub form: String,
    pub common_dosing: Vec<String>,
    pub is_controlled: bool,
}

impl CatalogItem {
    pub fn new(
        id: &str,
        name: &str,
        strength: &str,
        form: &str,
        common_dosing: &[&str],
        is_controlled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            strength: strength.into(),
            form: form.into(),
            common_dosing: common_dosing.iter().map(|d| d.to_string()).collect(),
            is_controlled,
        }
    }

    pub fn to_candidate(&self) -> MedicationCandidate {
        MedicationCandidate {
            id: Some(self.id.clone()),
            rxcui: None,
            name: self.name.clone(),
            strength: Some(self.strength.clone()),
            form: Some(self.form.clone()),
            common_dosing: self.common_dosing.clone(),
            is_controlled: self.is_controlled,
        }
    }
}

/// In-memory catalog seeded with the demo formulary.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    items: Vec<CatalogItem>,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCatalog {
    /// Create the catalog with the default formulary.
    pub fn new() -> Self {
        Self {
            items: Self::default_items(),
        }
    }

    /// Create a catalog from explicit items.
    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// All catalog items.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Score how well an item name matches a lowercase query (0.0 - 1.0).
    fn score_name(name: &str, query_lower: &str) -> f64 {
        let name_lower = name.to_lowercase();
        if name_lower.contains(query_lower) {
            return 1.0;
        }

        name_lower
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|word| !word.is_empty())
            .map(|word| jaro_winkler(query_lower, word))
            .fold(0.0, f64::max)
    }

    fn default_items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(
                "amox-250", "Amoxicillin 250mg capsule", "250mg", "capsule",
                &["250mg TID", "250mg BID"],
                false,
            ),
            CatalogItem::new(
                "amox-500", "Amoxicillin 500mg capsule", "500mg", "capsule",
                &["500mg TID", "500mg BID"],
                false,
            ),
            CatalogItem::new(
                "amox-875", "Amoxicillin 875mg tablet", "875mg", "tablet",
                &["875mg BID"],
                false,
            ),
            CatalogItem::new(
                "lisinopril-5", "Lisinopril 5mg tablet", "5mg", "tablet",
                &["5mg daily"],
                false,
            ),
            CatalogItem::new(
                "lisinopril-10", "Lisinopril 10mg tablet", "10mg", "tablet",
                &["10mg daily"],
                false,
            ),
            CatalogItem::new(
                "lisinopril-20", "Lisinopril 20mg tablet", "20mg", "tablet",
                &["20mg daily"],
                false,
            ),
            CatalogItem::new(
                "metformin-500", "Metformin 500mg tablet", "500mg", "tablet",
                &["500mg BID", "500mg daily"],
                false,
            ),
            CatalogItem::new(
                "metformin-850", "Metformin 850mg tablet", "850mg", "tablet",
                &["850mg BID"],
                false,
            ),
            CatalogItem::new(
                "metformin-1000", "Metformin 1000mg tablet", "1000mg", "tablet",
                &["1000mg BID"],
                false,
            ),
            CatalogItem::new(
                "atorvastatin-10", "Atorvastatin 10mg tablet", "10mg", "tablet",
                &["10mg daily at bedtime"],
                false,
            ),
            CatalogItem::new(
                "atorvastatin-20", "Atorvastatin 20mg tablet", "20mg", "tablet",
                &["20mg daily at bedtime"],
                false,
            ),
            CatalogItem::new(
                "atorvastatin-40", "Atorvastatin 40mg tablet", "40mg", "tablet",
                &["40mg daily at bedtime"],
                false,
            ),
            CatalogItem::new(
                "omeprazole-20", "Omeprazole 20mg capsule", "20mg", "capsule",
                &["20mg daily before breakfast"],
                false,
            ),
            CatalogItem::new(
                "omeprazole-40", "Omeprazole 40mg capsule", "40mg", "capsule",
                &["40mg daily before breakfast"],
                false,
            ),
            CatalogItem::new(
                "amlodipine-5", "Amlodipine 5mg tablet", "5mg", "tablet",
                &["5mg daily"],
                false,
            ),
            CatalogItem::new(
                "amlodipine-10", "Amlodipine 10mg tablet", "10mg", "tablet",
                &["10mg daily"],
                false,
            ),
            CatalogItem::new(
                "hydrocodone-5-325", "Hydrocodone/APAP 5/325mg tablet", "5/325mg", "tablet",
                &["1-2 tablets every 4-6 hours PRN"],
                true,
            ),
            CatalogItem::new(
                "oxycodone-5", "Oxycodone 5mg tablet", "5mg", "tablet",
                &["5mg every 4-6 hours PRN"],
                true,
            ),
            CatalogItem::new(
                "gabapentin-100", "Gabapentin 100mg capsule", "100mg", "capsule",
                &["100mg TID"],
                false,
            ),
            CatalogItem::new(
                "gabapentin-300", "Gabapentin 300mg capsule", "300mg", "capsule",
                &["300mg TID"],
                false,
            ),
            CatalogItem::new(
                "prednisone-5", "Prednisone 5mg tablet", "5mg", "tablet",
                &["5mg daily", "Taper per instructions"],
                false,
            ),
            CatalogItem::new(
                "prednisone-10", "Prednisone 10mg tablet", "10mg", "tablet",
                &["10mg daily", "Taper per instructions"],
                false,
            ),
            CatalogItem::new(
                "azithromycin-250", "Azithromycin 250mg tablet", "250mg", "tablet",
                &["500mg day 1, then 250mg days 2-5"],
                false,
            ),
            CatalogItem::new(
                "ciprofloxacin-500", "Ciprofloxacin 500mg tablet", "500mg", "tablet",
                &["500mg BID"],
                false,
            ),
            CatalogItem::new(
                "albuterol-inhaler", "Albuterol 90mcg inhaler", "90mcg/actuation", "inhaler",
                &["2 puffs every 4-6 hours PRN"],
                false,
            ),
        ]
    }
}

impl MedicationCatalog for FixtureCatalog {
    fn search(&self, query: &str) -> ServiceResult<Vec<MedicationCandidate>> {
        let query_lower = query.trim().to_lowercase();

        let mut scored: Vec<(f64, &CatalogItem)> = self
            .items
            .iter()
            .map(|item| (Self::score_name(&item.name, &query_lower), item))
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        tracing::debug!(query, matches = scored.len(), "fixture catalog search");

        Ok(scored
            .into_iter()
            .take(MAX_SEARCH_RESULTS)
            .map(|(_, item)| item.to_candidate())
            .collect())
    }
}
