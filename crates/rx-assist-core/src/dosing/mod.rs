//! Dosing inference from free-text medication names.
//!
//! Pipeline: lowercase → drug identification → strength extraction → lookup
//!
//! Identification is a substring heuristic over [`DRUG_REFERENCE`]; the first
//! key in table order that occurs in the name wins. Nothing here fails:
//! unidentified names yield no dosing and the chronic 30-day duration.

mod classes;
mod reference;

pub use classes::*;
pub use reference::*;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// First number in a name, optionally followed by a dose unit.
static STRENGTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(mg/ml|mcg|mg)?").expect("strength pattern is valid")
});

/// Strength parsed from a medication name (e.g. "500" + "MG").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strength {
    /// Numeric token exactly as written (e.g. "500", "6.25")
    pub value: String,
    /// Unit as written, when one follows the number
    pub unit: Option<String>,
}

/// Find the canonical drug whose key occurs in the name.
pub fn identify_drug(medication_name: &str) -> Option<&'static DrugReference> {
    let name_lower = medication_name.to_lowercase();
    DRUG_REFERENCE
        .iter()
        .find(|entry| name_lower.contains(entry.key))
}

/// Extract the first numeric strength token from the original name.
pub fn extract_strength(medication_name: &str) -> Option<Strength> {
    let caps = STRENGTH_PATTERN.captures(medication_name)?;
    Some(Strength {
        value: caps.get(1)?.as_str().to_string(),
        unit: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

/// Common dosing instructions for a medication name.
///
/// Returns the strength-specific list when the extracted strength is in the
/// drug's table, the drug's default list otherwise, and an empty list when no
/// drug is identified.
pub fn infer_dosing(medication_name: &str) -> Vec<String> {
    let Some(drug) = identify_drug(medication_name) else {
        tracing::debug!(medication_name, "no reference drug identified");
        return Vec::new();
    };

    let strength = extract_strength(medication_name);
    let instructions = drug.dosing_for(strength.as_ref().map(|s| s.value.as_str()));

    tracing::debug!(
        medication_name,
        drug = drug.key,
        strength = strength.as_ref().map(|s| s.value.as_str()),
        "inferred dosing"
    );

    instructions.iter().map(|s| s.to_string()).collect()
}

/// Duration class of a medication name.
pub fn classify(medication_name: &str) -> DrugClass {
    DrugClass::of(identify_drug(medication_name).map(|drug| drug.key))
}

/// Default prescription length in days for a medication name.
pub fn infer_default_duration_days(medication_name: &str) -> u32 {
    classify(medication_name).default_duration_days()
}
