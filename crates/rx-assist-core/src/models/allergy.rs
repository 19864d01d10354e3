//! Allergy models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder rendered for a missing allergen or reaction.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Documented severity of an allergy.
///
/// Parsed case-insensitively, so charted text such as "Severe" or "SEVERE"
/// becomes [`AllergySeverity::Severe`] and is rendered in its canonical
/// lowercase form. Text outside the known set is kept verbatim so it can
/// still be shown to the prescriber.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AllergySeverity {
    Severe,
    Moderate,
    Mild,
    #[default]
    Unknown,
    Other(String),
}

impl AllergySeverity {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &str {
        match self {
            AllergySeverity::Severe => "severe",
            AllergySeverity::Moderate => "moderate",
            AllergySeverity::Mild => "mild",
            AllergySeverity::Unknown => "unknown",
            AllergySeverity::Other(text) => text,
        }
    }

    /// Only severe allergies block prescribing.
    ///
    /// Blocking does not depend on how the severity was capitalised when
    /// charted: "Severe" blocks exactly like "severe". Unrecognised text,
    /// however alarming, is non-blocking.
    pub fn is_blocking(&self) -> bool {
        matches!(self, AllergySeverity::Severe)
    }
}

impl From<&str> for AllergySeverity {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "severe" => AllergySeverity::Severe,
            "moderate" => AllergySeverity::Moderate,
            "mild" => AllergySeverity::Mild,
            "unknown" | "" => AllergySeverity::Unknown,
            _ => AllergySeverity::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for AllergySeverity {
    fn from(value: String) -> Self {
        AllergySeverity::from(value.as_str())
    }
}

impl From<AllergySeverity> for String {
    fn from(severity: AllergySeverity) -> Self {
        match severity {
            AllergySeverity::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AllergySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented allergy belonging to one patient.
///
/// Every field is optional because upstream records are loosely filled in;
/// the checker substitutes placeholders rather than rejecting a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllergyRecord {
    /// Record identifier (e.g. "allergy-1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-text allergen (e.g. "Penicillin")
    #[serde(default)]
    pub allergen: Option<String>,
    /// Free-text reaction (e.g. "Anaphylaxis")
    #[serde(default)]
    pub reaction: Option<String>,
    /// Documented severity
    #[serde(default)]
    pub severity: Option<AllergySeverity>,
    /// Date the allergy was documented (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documented: Option<String>,
}

impl AllergyRecord {
    /// Create a record with allergen, reaction and severity filled in.
    pub fn new(allergen: &str, reaction: &str, severity: AllergySeverity) -> Self {
        Self {
            id: None,
            allergen: Some(allergen.to_string()),
            reaction: Some(reaction.to_string()),
            severity: Some(severity),
            documented: None,
        }
    }

    /// Lowercased allergen used for matching. Missing allergen matches as "".
    pub fn canonical_allergen(&self) -> String {
        self.allergen.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Allergen for display, "Unknown" when missing or blank.
    pub fn display_allergen(&self) -> String {
        display_or_unknown(self.allergen.as_deref())
    }

    /// Reaction for display, "Unknown" when missing or blank.
    pub fn display_reaction(&self) -> String {
        display_or_unknown(self.reaction.as_deref())
    }

    /// Severity, defaulting to `Unknown`.
    pub fn severity(&self) -> AllergySeverity {
        self.severity.clone().unwrap_or_default()
    }
}

fn display_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => UNKNOWN_FIELD.to_string(),
    }
}
