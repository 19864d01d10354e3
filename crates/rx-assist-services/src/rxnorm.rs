//! RxNorm `drugs.json` response parsing.
//!
//! Only clinical drugs (SCD) and branded drugs (SBD) are kept; ingredient
//! and pack concept groups are dropped.

use rx_assist_core::dosing::{extract_strength, infer_dosing};
use serde::{Deserialize, Serialize};

use crate::catalog::MedicationCandidate;
use crate::ServiceResult;

/// Term types offered to prescribers.
const PRESCRIBABLE_TTYS: [&str; 2] = ["SCD", "SBD"];

/// Top-level `drugs.json` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugsResponse {
    #[serde(default)]
    pub drug_group: DrugGroup,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugGroup {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub concept_group: Vec<ConceptGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptGroup {
    #[serde(default)]
    pub tty: String,
    #[serde(default)]
    pub concept_properties: Vec<ConceptProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConceptProperties {
    #[serde(default)]
    pub rxcui: String,
    #[serde(default)]
    pub name: String,
}

/// A prescribable RxNorm concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RxNormConcept {
    pub rxcui: String,
    pub name: String,
    pub tty: String,
}

impl RxNormConcept {
    /// Convert to a catalog candidate. Strength is read off the name.
    pub fn to_candidate(&self) -> MedicationCandidate {
        let strength = extract_strength(&self.name).map(|s| match s.unit {
            Some(unit) => format!("{} {}", s.value, unit),
            None => s.value,
        });

        MedicationCandidate {
            id: None,
            rxcui: Some(self.rxcui.clone()),
            name: self.name.clone(),
            strength,
            form: None,
            common_dosing: infer_dosing(&self.name),
            is_controlled: false,
        }
    }
}

/// Parse a `drugs.json` body into prescribable concepts, in response order.
pub fn parse_drug_response(json: &str) -> ServiceResult<Vec<RxNormConcept>> {
    let response: DrugsResponse = serde_json::from_str(json).map_err(|e| {
        tracing::warn!("Malformed RxNorm response: {e}");
        e
    })?;

    let concepts: Vec<RxNormConcept> = response
        .drug_group
        .concept_group
        .into_iter()
        .filter(|group| PRESCRIBABLE_TTYS.iter().any(|tty| *tty == group.tty))
        .flat_map(|group| {
            let tty = group.tty;
            group
                .concept_properties
                .into_iter()
                .map(move |concept| RxNormConcept {
                    rxcui: concept.rxcui,
                    name: concept.name,
                    tty: tty.clone(),
                })
        })
        .collect();

    tracing::debug!(count = concepts.len(), "parsed RxNorm concepts");
    Ok(concepts)
}
